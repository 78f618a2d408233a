//! Output formatting for fitcoach.
//!
//! Plans, log entries and progress reports can be rendered for a terminal
//! or as JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::FitcoachError;
use crate::features::log::WorkoutLog;
use crate::features::progress::ProgressReport;
use crate::features::session::WorkoutPlan;

pub use json::*;
pub use pretty::*;

/// Format a workout plan based on output format
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn format_plan(plan: &WorkoutPlan, format: OutputFormat) -> Result<String, FitcoachError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(plan)),
        OutputFormat::Json => format_plan_json(plan),
    }
}

/// Format workout log entries based on output format
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn format_logs(logs: &[WorkoutLog], format: OutputFormat) -> Result<String, FitcoachError> {
    match format {
        OutputFormat::Pretty => Ok(format_logs_pretty(logs)),
        OutputFormat::Json => format_logs_json(logs),
    }
}

/// Format a single log entry based on output format
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn format_log(log: &WorkoutLog, format: OutputFormat) -> Result<String, FitcoachError> {
    match format {
        OutputFormat::Pretty => Ok(format_log_pretty(log)),
        OutputFormat::Json => to_json(log),
    }
}

/// Format a progress report based on output format
///
/// # Errors
///
/// Returns `FitcoachError::Parse` if JSON serialization fails.
pub fn format_report(
    report: &ProgressReport,
    format: OutputFormat,
) -> Result<String, FitcoachError> {
    match format {
        OutputFormat::Pretty => Ok(report.format()),
        OutputFormat::Json => to_json(report),
    }
}
