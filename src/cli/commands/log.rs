//! Workout log command implementation.

use chrono::{Local, Utc};
use colored::Colorize;
use serde_json::json;

use crate::cli::args::{LogCommands, OutputFormat};
use crate::cli::commands::Context;
use crate::error::FitcoachError;
use crate::features::log::WorkoutLog;
use crate::output::{format_log, format_logs, to_json};

/// Execute log subcommands. No subcommand lists recent entries.
///
/// # Errors
///
/// Returns an error if the database fails, the entry does not exist, or
/// `clear` is not confirmed.
pub fn log(ctx: &Context, cmd: Option<LogCommands>) -> Result<String, FitcoachError> {
    let storage = ctx.log_storage()?;

    let list_recent = LogCommands::List {
        limit: None,
        date: None,
    };

    match cmd.unwrap_or(list_recent) {
        LogCommands::List {
            limit,
            date: Some(day),
        } => {
            let mut logs = storage.get_day(day, &Local)?;
            if let Some(limit) = limit {
                logs.truncate(limit);
            }
            let output = format_logs(&logs, ctx.format)?;
            match ctx.format {
                OutputFormat::Json => Ok(output),
                OutputFormat::Pretty => {
                    let heading = format!("Workouts on {}", day.format("%A, %B %-d %Y"));
                    Ok(format!("{}\n{output}", heading.bold()))
                }
            }
        }

        LogCommands::List { limit, date: None } => {
            let limit = limit.unwrap_or(ctx.config.progress.recent_limit);
            let logs = storage.get_recent(limit)?;
            let output = format_logs(&logs, ctx.format)?;

            let total = storage.count()?;
            let shown = i64::try_from(logs.len()).unwrap_or(i64::MAX);
            if ctx.format == OutputFormat::Pretty && total > shown {
                let hint = format!("Showing {shown} of {total}. Use --limit to see more.");
                Ok(format!("{output}\n{}", hint.dimmed()))
            } else {
                Ok(output)
            }
        }

        LogCommands::Add {
            title,
            focus,
            difficulty,
            minutes,
        } => {
            if title.trim().is_empty() {
                return Err(FitcoachError::Config("Title cannot be empty".to_string()));
            }
            let mut entry = WorkoutLog::new(title, focus, difficulty, minutes, Utc::now());
            storage.save(&mut entry)?;
            tracing::info!(id = ?entry.id, title = %entry.title, "workout logged manually");

            match ctx.format {
                OutputFormat::Json => format_log(&entry, ctx.format),
                OutputFormat::Pretty => Ok(format!(
                    "{} Logged {}",
                    "✓".green(),
                    format_log(&entry, ctx.format)?.trim_start()
                )),
            }
        }

        LogCommands::Delete { id } => {
            if !storage.delete(id)? {
                return Err(FitcoachError::NotFound(format!("Workout log #{id}")));
            }
            match ctx.format {
                OutputFormat::Json => to_json(&json!({ "deleted": id })),
                OutputFormat::Pretty => Ok(format!("Deleted workout log #{id}")),
            }
        }

        LogCommands::Clear { force } => {
            if !force {
                return Err(FitcoachError::Config(
                    "This will delete your whole workout history.\nUse --force to confirm."
                        .to_string(),
                ));
            }
            let removed = storage.clear()?;
            match ctx.format {
                OutputFormat::Json => to_json(&json!({ "deleted": removed })),
                OutputFormat::Pretty => Ok(format!("Removed {removed} workout log entries")),
            }
        }
    }
}
