//! fitcoach - guided workouts in the terminal
//!
//! This crate plays workout plans step by step with a per-second countdown,
//! records finished sessions in a local `SQLite` log and derives progress
//! analytics from that log.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FitcoachError;
pub use features::session::{PlaybackController, PlaybackEvent, PlaybackState, WorkoutPlan};
