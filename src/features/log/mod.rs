//! Workout log.
//!
//! Completed sessions are written to the local database and read back for
//! history listings and progress reports.

pub mod entry;
pub mod recorder;
pub mod storage;

pub use entry::WorkoutLog;
pub use recorder::LogRecorder;
pub use storage::WorkoutLogStorage;
