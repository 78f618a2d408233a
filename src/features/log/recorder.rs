//! Records finished sessions into the workout log.

use chrono::Utc;

use super::entry::WorkoutLog;
use super::storage::WorkoutLogStorage;
use crate::features::session::{ExerciseStep, PlaybackObserver, WorkoutSummary};

/// Playback observer that writes a log entry when a session finishes.
///
/// Storage failures are logged and kept in [`last_error`](Self::last_error);
/// they never interrupt playback.
pub struct LogRecorder {
    storage: Option<WorkoutLogStorage>,
    saved: Option<WorkoutLog>,
    last_error: Option<String>,
    steps_seen: usize,
}

impl LogRecorder {
    /// Recorder that persists into `storage`.
    #[must_use]
    pub const fn new(storage: WorkoutLogStorage) -> Self {
        Self {
            storage: Some(storage),
            saved: None,
            last_error: None,
            steps_seen: 1,
        }
    }

    /// Recorder that only tracks what happened.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            storage: None,
            saved: None,
            last_error: None,
            steps_seen: 1,
        }
    }

    /// The entry written on finish, if any.
    #[must_use]
    pub const fn saved(&self) -> Option<&WorkoutLog> {
        self.saved.as_ref()
    }

    /// Why the last save failed, if it did.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Number of distinct steps played, counting the first.
    #[must_use]
    pub const fn steps_seen(&self) -> usize {
        self.steps_seen
    }
}

impl PlaybackObserver for LogRecorder {
    fn on_step_changed(&mut self, _step: &ExerciseStep, index: usize) {
        self.steps_seen = self.steps_seen.max(index + 1);
    }

    fn on_finished(&mut self, summary: &WorkoutSummary) {
        let Some(storage) = &self.storage else {
            tracing::debug!("recording disabled, not logging finished session");
            return;
        };

        let mut log = WorkoutLog::from_summary(summary, Utc::now());
        match storage.save(&mut log) {
            Ok(()) => self.saved = Some(log),
            Err(e) => {
                tracing::error!(error = %e, title = %summary.title, "failed to record workout");
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn on_closed(&mut self) {
        tracing::debug!(steps = self.steps_seen, "session closed, nothing to record");
    }
}
