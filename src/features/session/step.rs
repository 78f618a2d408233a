//! Exercise steps.
//!
//! A step is one timed unit of a guided session.

use serde::{Deserialize, Serialize};

/// Kind of exercise a step represents.
///
/// Only used as a tag; the player treats every kind the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    /// Resistance work
    Strength,
    /// Heart-rate work
    Cardio,
    /// Stretching and range of motion
    Mobility,
    /// Recovery between blocks
    Rest,
}

impl ExerciseType {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Mobility => "Mobility",
            Self::Rest => "Rest",
        }
    }

    /// Lowercase tag as used in plan files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Mobility => "mobility",
            Self::Rest => "rest",
        }
    }
}

impl std::fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One timed exercise in a workout plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseStep {
    /// Display label
    pub name: String,
    /// Instructional text
    #[serde(default)]
    pub description: String,
    /// Exercise kind
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    /// Length of the step in seconds
    #[serde(rename = "duration")]
    pub duration_secs: u32,
    /// Free-text target such as "12 reps" (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
}

impl ExerciseStep {
    /// Create a step without a reps target.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        exercise_type: ExerciseType,
        duration_secs: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            exercise_type,
            duration_secs,
            reps: None,
        }
    }

    /// Attach a reps target.
    #[must_use]
    pub fn with_reps(mut self, reps: impl Into<String>) -> Self {
        self.reps = Some(reps.into());
        self
    }

    /// Whether this step has no countdown at all.
    #[must_use]
    pub const fn is_zero_length(&self) -> bool {
        self.duration_secs == 0
    }
}
