//! Progress command implementation.

use chrono::Local;

use crate::cli::commands::Context;
use crate::error::FitcoachError;
use crate::features::progress::ProgressReport;
use crate::output::format_report;

/// Execute progress command
///
/// # Errors
///
/// Returns an error if the workout log cannot be read.
pub fn progress(ctx: &Context) -> Result<String, FitcoachError> {
    let logs = ctx.log_storage()?.all()?;
    let report = ProgressReport::generate(&logs, &Local::now(), &ctx.config.progress);
    tracing::debug!(
        sessions = report.sessions_completed,
        streak = report.current_streak,
        "progress report generated"
    );
    format_report(&report, ctx.format)
}
