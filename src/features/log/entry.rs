//! Workout log entries.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::features::session::WorkoutSummary;

/// One completed workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLog {
    /// Database ID (None if not persisted)
    pub id: Option<i64>,
    /// When the workout was completed
    pub logged_at: DateTime<Utc>,
    /// Length in minutes
    pub duration_minutes: u32,
    /// Session title
    pub title: String,
    /// Focus label
    pub focus: String,
    /// Difficulty label
    pub difficulty: String,
}

impl WorkoutLog {
    /// Create an unsaved entry.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        focus: impl Into<String>,
        difficulty: impl Into<String>,
        duration_minutes: u32,
        logged_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            logged_at,
            duration_minutes,
            title: title.into(),
            focus: focus.into(),
            difficulty: difficulty.into(),
        }
    }

    /// Entry for a finished session.
    #[must_use]
    pub fn from_summary(summary: &WorkoutSummary, logged_at: DateTime<Utc>) -> Self {
        Self::new(
            summary.title.clone(),
            summary.focus.clone(),
            summary.difficulty.clone(),
            summary.total_duration_minutes,
            logged_at,
        )
    }

    /// Completion time in the local timezone.
    #[must_use]
    pub fn logged_at_local(&self) -> DateTime<Local> {
        self.logged_at.with_timezone(&Local)
    }

    /// Whether the title or focus mentions `keyword`.
    #[must_use]
    pub fn mentions(&self, keyword: &str) -> bool {
        self.focus.contains(keyword) || self.title.contains(keyword)
    }
}
