//! Storage layer for fitcoach.
//!
//! SQLite-based persistence for the workout log.

mod database;
mod migrations;

pub use database::Database;
