//! Progress analytics computed from the workout log.

pub mod recovery;
pub mod report;

pub use recovery::{recovery_status, MuscleGroup, RecoveryLevel, RecoveryStatus, MUSCLE_GROUPS};
pub use report::{DayActivity, ProgressReport, TrendComparison};
