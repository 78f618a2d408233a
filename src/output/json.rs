//! JSON output formatting for fitcoach.

use serde::Serialize;
use serde_json::json;

use crate::error::FitcoachError;
use crate::features::log::WorkoutLog;
use crate::features::session::WorkoutPlan;

/// Format a plan as JSON, including its derived totals.
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn format_plan_json(plan: &WorkoutPlan) -> Result<String, FitcoachError> {
    let output = json!({
        "title": plan.title,
        "focus": plan.focus,
        "difficulty": plan.difficulty,
        "total_duration_minutes": plan.total_duration_minutes(),
        "total_step_seconds": plan.total_step_seconds(),
        "step_count": plan.steps.len(),
        "steps": plan.steps,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format log entries as JSON
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn format_logs_json(logs: &[WorkoutLog]) -> Result<String, FitcoachError> {
    let output = json!({
        "count": logs.len(),
        "total_minutes": logs.iter().map(|l| u64::from(l.duration_minutes)).sum::<u64>(),
        "items": logs
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FitcoachError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::features::session::{ExerciseStep, ExerciseType};

    #[test]
    fn test_plan_json_has_totals() {
        let plan = WorkoutPlan {
            title: "Quick".to_string(),
            focus: "Core".to_string(),
            difficulty: "Easy".to_string(),
            total_duration_minutes: None,
            steps: vec![
                ExerciseStep::new("Plank", "Hold", ExerciseType::Strength, 45),
                ExerciseStep::new("Rest", "", ExerciseType::Rest, 30),
            ],
        };

        let value: serde_json::Value =
            serde_json::from_str(&format_plan_json(&plan).unwrap()).unwrap();
        assert_eq!(value["step_count"], 2);
        assert_eq!(value["total_step_seconds"], 75);
        assert_eq!(value["total_duration_minutes"], 2);
        assert_eq!(value["steps"][0]["type"], "strength");
    }

    #[test]
    fn test_logs_json() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 7, 0, 0).unwrap();
        let logs = vec![
            WorkoutLog::new("A", "Core", "Easy", 10, at),
            WorkoutLog::new("B", "Cardio", "Hard", 25, at),
        ];

        let value: serde_json::Value =
            serde_json::from_str(&format_logs_json(&logs).unwrap()).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["total_minutes"], 35);
        assert_eq!(value["items"][1]["title"], "B");
    }
}
