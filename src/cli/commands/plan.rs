//! Plan command implementation.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, PlanCommands};
use crate::cli::commands::Context;
use crate::error::FitcoachError;
use crate::features::session::{format_minutes, WorkoutPlan};
use crate::output::{format_plan, to_json};

/// Execute plan subcommands.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or is not playable.
pub fn plan(ctx: &Context, cmd: PlanCommands) -> Result<String, FitcoachError> {
    match cmd {
        PlanCommands::Show { plan } => {
            let plan = WorkoutPlan::load(&plan)?;
            format_plan(&plan, ctx.format)
        }
        PlanCommands::Validate { plan: path } => {
            let plan = WorkoutPlan::load(&path)?;
            let zero_length = plan.steps.iter().filter(|s| s.is_zero_length()).count();

            match ctx.format {
                OutputFormat::Json => to_json(&json!({
                    "valid": true,
                    "path": path.display().to_string(),
                    "title": plan.title,
                    "steps": plan.steps.len(),
                    "zero_length_steps": zero_length,
                    "total_duration_minutes": plan.total_duration_minutes(),
                })),
                OutputFormat::Pretty => {
                    let mut out = format!(
                        "{} {} ({} steps, {})",
                        "✓".green(),
                        plan.title.bold(),
                        plan.steps.len(),
                        format_minutes(plan.total_duration_minutes())
                    );
                    if zero_length > 0 {
                        out.push_str(&format!(
                            "\n{} {zero_length} step(s) have no duration \
                             and will be skipped on the first tick",
                            "!".yellow()
                        ));
                    }
                    Ok(out)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn ctx(dir: &TempDir, format: OutputFormat) -> Context {
        Context::with_root(dir.path().join("home"), format)
    }

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_validate_ok() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "ok.yaml",
            "title: Quick
steps:
  - name: Jacks
    type: cardio
    duration: 30
  - name: Hold
    type: rest
    duration: 0
",
        );

        let ctx = ctx(&dir, OutputFormat::Pretty);
        let out = plan(&ctx, PlanCommands::Validate { plan: path }).unwrap();
        assert!(out.contains("Quick"));
        assert!(out.contains("2 steps"));
        assert!(out.contains("1 step(s) have no duration"));
    }

    #[test]
    fn test_validate_empty_plan() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.yaml", "title: Nothing\nsteps: []\n");

        let ctx = ctx(&dir, OutputFormat::Pretty);
        let err = plan(&ctx, PlanCommands::Validate { plan: path }).unwrap_err();
        assert!(matches!(err, FitcoachError::InvalidSession(_)));
    }

    #[test]
    fn test_show_json() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "plan.json",
            r#"{"title":"Json","exercises":[{"name":"Run","type":"cardio","duration":60}]}"#,
        );

        let ctx = ctx(&dir, OutputFormat::Json);
        let out = plan(&ctx, PlanCommands::Show { plan: path }).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Json");
        assert_eq!(value["total_duration_minutes"], 1);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = plan(
            &ctx(&dir, OutputFormat::Pretty),
            PlanCommands::Show {
                plan: dir.path().join("missing.yaml"),
            },
        )
        .unwrap_err();
        assert!(matches!(err, FitcoachError::NotFound(_)));
    }
}
