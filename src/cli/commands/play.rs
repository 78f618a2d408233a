//! Play command implementation.
//!
//! Loads a plan and drives it either through the full-screen player or a
//! line-oriented loop that prints one line per step.

use std::io::Write;
use std::time::{Duration, Instant};

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, PlayArgs};
use crate::cli::commands::Context;
use crate::error::FitcoachError;
use crate::features::log::LogRecorder;
use crate::features::session::{
    ExerciseStep, PlaybackObserver, SessionRunner, Ticker, WorkoutPlan, WorkoutSummary,
};
use crate::output::{format_session_complete, format_step_banner, to_json};
use crate::tui;

/// Execute play command
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded, the log database cannot be
/// opened, or the terminal fails.
pub fn play(ctx: &Context, args: &PlayArgs) -> Result<String, FitcoachError> {
    let plan = WorkoutPlan::load(&args.plan)?;

    let record = !args.no_record && ctx.config.player.record_on_finish;
    let recorder = if record {
        LogRecorder::new(ctx.log_storage()?)
    } else {
        LogRecorder::disabled()
    };

    let interval = args
        .tick_ms
        .map_or_else(|| ctx.config.player.tick_interval(), Duration::from_millis);
    let ticker = Ticker::new(interval);

    let plain = ctx.plays_plain(args);

    tracing::info!(
        title = %plan.title,
        steps = plan.steps.len(),
        interval_ms = interval.as_millis(),
        plain,
        record,
        "starting session"
    );

    let (finished, recorder) = if plain {
        let echo = ctx.format == OutputFormat::Pretty;
        run_plain(&plan, ticker, recorder, &mut std::io::stdout(), echo)?
    } else {
        tui::run(SessionRunner::new(&plan, ticker, recorder)?)?
    };

    if let Some(error) = recorder.last_error() {
        tracing::warn!(%error, "session finished but was not recorded");
    }

    render_outcome(&plan, finished, &recorder, ctx.format)
}

/// Prints a banner whenever playback enters a new step.
struct StepEcho<'w, O, W> {
    inner: O,
    out: &'w mut W,
    total: usize,
    enabled: bool,
    error: Option<std::io::Error>,
}

impl<O: PlaybackObserver, W: Write> StepEcho<'_, O, W> {
    fn print(&mut self, line: &str) {
        if !self.enabled || self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            self.error = Some(e);
        }
    }
}

impl<O: PlaybackObserver, W: Write> PlaybackObserver for StepEcho<'_, O, W> {
    fn on_step_changed(&mut self, step: &ExerciseStep, index: usize) {
        let banner = format_step_banner(index, self.total, step);
        self.print(&format!("{} {banner}", "▶".green()));
        self.inner.on_step_changed(step, index);
    }

    fn on_finished(&mut self, summary: &WorkoutSummary) {
        self.inner.on_finished(summary);
    }

    fn on_closed(&mut self) {
        self.inner.on_closed();
    }
}

/// Run a session to completion on the current thread, writing a line to
/// `out` for every step when `echo` is set.
///
/// Returns whether the session finished, and the observer.
///
/// # Errors
///
/// Returns an error if the plan has no steps or writing to `out` fails.
pub fn run_plain<O: PlaybackObserver, W: Write>(
    plan: &WorkoutPlan,
    ticker: Ticker,
    observer: O,
    out: &mut W,
    echo: bool,
) -> Result<(bool, O), FitcoachError> {
    let mut echo_observer = StepEcho {
        inner: observer,
        out,
        total: plan.steps.len(),
        enabled: echo,
        error: None,
    };
    if let Some(first) = plan.steps.first() {
        let banner = format_step_banner(0, plan.steps.len(), first);
        echo_observer.print(&format!("{} {banner}", "▶".green()));
    }

    let mut runner = SessionRunner::new(plan, ticker, echo_observer)?;
    runner.start(Instant::now());

    while !runner.is_finished() {
        let Some(wait) = runner.ticker().time_until_next(Instant::now()) else {
            break;
        };
        std::thread::sleep(wait);
        runner.pump(Instant::now());
    }

    let finished = runner.is_finished();
    let StepEcho { inner, error, .. } = runner.close();
    if let Some(e) = error {
        return Err(e.into());
    }
    Ok((finished, inner))
}

fn render_outcome(
    plan: &WorkoutPlan,
    finished: bool,
    recorder: &LogRecorder,
    format: OutputFormat,
) -> Result<String, FitcoachError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "finished": finished,
            "summary": plan.summary(),
            "steps_played": recorder.steps_seen(),
            "log": recorder.saved(),
            "error": recorder.last_error(),
        })),
        OutputFormat::Pretty if finished => Ok(format_session_complete(
            &plan.summary(),
            recorder.saved().is_some(),
        )),
        OutputFormat::Pretty => Ok(format!(
            "Session closed after {} of {} steps. Nothing was recorded.",
            recorder.steps_seen(),
            plan.steps.len()
        )),
    }
}
