//! Muscle group recovery estimate.
//!
//! Each group is matched against workout titles and focus labels by keyword;
//! the time since the latest matching workout decides how rested it is.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::config::ProgressConfig;
use crate::features::log::WorkoutLog;

/// A muscle group and the words that identify it.
#[derive(Debug, Clone, Copy)]
pub struct MuscleGroup {
    /// Display name
    pub name: &'static str,
    /// Case-sensitive keywords searched in title and focus
    pub keywords: &'static [&'static str],
}

/// Groups shown in the progress report.
pub const MUSCLE_GROUPS: [MuscleGroup; 4] = [
    MuscleGroup {
        name: "Upper Body",
        keywords: &[
            "Upper",
            "Arms",
            "Chest",
            "Back",
            "Shoulders",
            "Push",
            "Pull",
        ],
    },
    MuscleGroup {
        name: "Lower Body",
        keywords: &["Lower", "Legs", "Squat", "Glutes", "Hinge"],
    },
    MuscleGroup {
        name: "Core",
        keywords: &["Core", "Abs", "Plank"],
    },
    MuscleGroup {
        name: "Cardio",
        keywords: &["Cardio", "HIIT", "Sweat", "Endurance"],
    },
];

/// How ready a group is for training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryLevel {
    /// Trained very recently
    Resting,
    /// Trained recently
    Recovering,
    /// Fully recovered or never trained
    Ready,
}

impl RecoveryLevel {
    /// Battery percentage shown for this level.
    #[must_use]
    pub const fn percent(self) -> u8 {
        match self {
            Self::Resting => 30,
            Self::Recovering => 70,
            Self::Ready => 100,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Resting => "Resting",
            Self::Recovering => "Recovering",
            Self::Ready => "Ready",
        }
    }
}

/// Recovery state of one muscle group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryStatus {
    /// Group name
    pub group: String,
    /// Recovery level
    pub level: RecoveryLevel,
    /// Battery percentage
    pub percent: u8,
    /// Hours since the group was last trained, if ever
    pub hours_since: Option<f64>,
}

/// Compute the recovery state of every group.
#[must_use]
pub fn recovery_status<Tz: TimeZone>(
    logs: &[WorkoutLog],
    now: &DateTime<Tz>,
    config: &ProgressConfig,
) -> Vec<RecoveryStatus> {
    MUSCLE_GROUPS
        .iter()
        .map(|group| {
            let last = logs
                .iter()
                .filter(|log| group.keywords.iter().any(|k| log.mentions(k)))
                .max_by_key(|log| log.logged_at);

            let hours_since = last.map(|log| {
                #[allow(clippy::cast_precision_loss)]
                let minutes = now.clone().signed_duration_since(log.logged_at).num_minutes() as f64;
                minutes / 60.0
            });

            let level = match hours_since {
                Some(h) if h < f64::from(config.resting_hours) => RecoveryLevel::Resting,
                Some(h) if h < f64::from(config.recovering_hours) => RecoveryLevel::Recovering,
                _ => RecoveryLevel::Ready,
            };

            RecoveryStatus {
                group: group.name.to_string(),
                level,
                percent: level.percent(),
                hours_since,
            }
        })
        .collect()
}
