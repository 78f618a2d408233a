//! Workout plans.
//!
//! A plan is the session object handed to the player: a title, some
//! descriptive metadata and the ordered list of steps. Plans are read from
//! YAML or JSON files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::step::ExerciseStep;
use crate::error::FitcoachError;

/// A guided workout as loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    /// Session title
    pub title: String,
    /// Body area or goal, e.g. "Lower Body"
    #[serde(default)]
    pub focus: String,
    /// Difficulty label, e.g. "Intermediate"
    #[serde(default)]
    pub difficulty: String,
    /// Advertised length in minutes
    #[serde(
        default,
        alias = "totalDuration",
        alias = "totalDurationMinutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_duration_minutes: Option<u32>,
    /// Ordered steps
    #[serde(alias = "exercises")]
    pub steps: Vec<ExerciseStep>,
}

/// What gets recorded once a session finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Session title
    pub title: String,
    /// Focus label
    pub focus: String,
    /// Difficulty label
    pub difficulty: String,
    /// Session length in minutes
    pub total_duration_minutes: u32,
}

impl WorkoutPlan {
    /// Load a plan from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, FitcoachError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FitcoachError::NotFound(format!("Plan file {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let plan = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };

        tracing::debug!(
            path = %path.display(),
            steps = plan.steps.len(),
            "loaded workout plan"
        );
        Ok(plan)
    }

    /// Parse and validate a YAML plan.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_yaml_str(s: &str) -> Result<Self, FitcoachError> {
        let plan: Self = serde_yaml::from_str(s)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Parse and validate a JSON plan.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn from_json_str(s: &str) -> Result<Self, FitcoachError> {
        let plan: Self = serde_json::from_str(s)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Check that the plan can be played.
    ///
    /// # Errors
    ///
    /// Returns `FitcoachError::InvalidSession` if the plan has no steps.
    pub fn validate(&self) -> Result<(), FitcoachError> {
        if self.steps.is_empty() {
            return Err(FitcoachError::InvalidSession(format!(
                "\"{}\" has no exercise steps",
                self.title
            )));
        }

        for (index, step) in self.steps.iter().enumerate() {
            if step.is_zero_length() {
                tracing::warn!(index, name = %step.name, "step has zero duration");
            }
        }

        Ok(())
    }

    /// Sum of all step durations in seconds.
    #[must_use]
    pub fn total_step_seconds(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.duration_secs)).sum()
    }

    /// Advertised length, falling back to the step total rounded up to minutes.
    #[must_use]
    pub fn total_duration_minutes(&self) -> u32 {
        self.total_duration_minutes.unwrap_or_else(|| {
            u32::try_from(self.total_step_seconds().div_ceil(60)).unwrap_or(u32::MAX)
        })
    }

    /// Completion record for this plan.
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        WorkoutSummary {
            title: self.title.clone(),
            focus: self.focus.clone(),
            difficulty: self.difficulty.clone(),
            total_duration_minutes: self.total_duration_minutes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::session::step::ExerciseType;
    use tempfile::TempDir;

    const YAML_PLAN: &str = r"
title: Leg Day
focus: Lower Body
difficulty: Intermediate
totalDuration: 20
exercises:
  - name: Squats
    description: Keep your chest up
    type: strength
    duration: 45
    reps: 15 reps
  - name: Breather
    type: rest
    duration: 15
";

    #[test]
    fn test_parse_yaml_with_aliases() {
        let plan = WorkoutPlan::from_yaml_str(YAML_PLAN).unwrap();
        assert_eq!(plan.title, "Leg Day");
        assert_eq!(plan.total_duration_minutes, Some(20));
        assert_eq!(plan.steps.len(), 2);
        assert_eq!(plan.steps[0].reps.as_deref(), Some("15 reps"));
        assert_eq!(plan.steps[1].exercise_type, ExerciseType::Rest);
        assert_eq!(plan.steps[1].description, "");
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "title": "Quick HIIT",
            "focus": "Cardio",
            "difficulty": "Hard",
            "steps": [{"name": "Burpees", "description": "", "type": "cardio", "duration": 40}]
        }"#;
        let plan = WorkoutPlan::from_json_str(json).unwrap();
        assert_eq!(plan.steps[0].name, "Burpees");
        assert_eq!(plan.total_duration_minutes(), 1);
    }

    #[test]
    fn test_empty_plan_is_invalid() {
        let result = WorkoutPlan::from_yaml_str("title: Nothing\nsteps: []\n");
        assert!(matches!(result, Err(FitcoachError::InvalidSession(_))));
    }

    #[test]
    fn test_zero_duration_step_is_accepted() {
        let plan = WorkoutPlan::from_yaml_str(
            "title: Odd\nsteps:\n  - name: Blink\n    type: rest\n    duration: 0\n",
        )
        .unwrap();
        assert!(plan.steps[0].is_zero_length());
    }

    #[test]
    fn test_total_duration_fallback() {
        let mut plan = WorkoutPlan::from_yaml_str(YAML_PLAN).unwrap();
        plan.total_duration_minutes = None;
        assert_eq!(plan.total_step_seconds(), 60);
        assert_eq!(plan.total_duration_minutes(), 1);

        plan.steps[0].duration_secs = 46;
        assert_eq!(plan.total_duration_minutes(), 2);
    }

    #[test]
    fn test_summary() {
        let plan = WorkoutPlan::from_yaml_str(YAML_PLAN).unwrap();
        let summary = plan.summary();
        assert_eq!(summary.title, "Leg Day");
        assert_eq!(summary.focus, "Lower Body");
        assert_eq!(summary.difficulty, "Intermediate");
        assert_eq!(summary.total_duration_minutes, 20);
    }

    #[test]
    fn test_load_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let yaml_path = temp_dir.path().join("plan.yaml");
        std::fs::write(&yaml_path, YAML_PLAN).unwrap();
        assert_eq!(WorkoutPlan::load(&yaml_path).unwrap().steps.len(), 2);

        let json_path = temp_dir.path().join("plan.json");
        let plan = WorkoutPlan::from_yaml_str(YAML_PLAN).unwrap();
        std::fs::write(&json_path, serde_json::to_string(&plan).unwrap()).unwrap();
        assert_eq!(WorkoutPlan::load(&json_path).unwrap(), plan);
    }

    #[test]
    fn test_load_missing_file() {
        let result = WorkoutPlan::load(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(FitcoachError::NotFound(_))));
    }
}
