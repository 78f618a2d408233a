//! Feature implementations for fitcoach.
//!
//! - Guided session playback
//! - Workout log
//! - Progress analytics
//! - Shell completions

pub mod log;
pub mod progress;
pub mod session;
pub mod shell;
