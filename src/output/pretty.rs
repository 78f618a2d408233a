use colored::{ColoredString, Colorize};

use crate::features::log::WorkoutLog;
use crate::features::session::{
    format_minutes, format_mmss, ExerciseStep, ExerciseType, WorkoutPlan, WorkoutSummary,
};

/// Color a label by exercise type.
pub fn colorize_type(exercise_type: ExerciseType, text: &str) -> ColoredString {
    match exercise_type {
        ExerciseType::Strength => text.magenta(),
        ExerciseType::Cardio => text.red(),
        ExerciseType::Mobility => text.green(),
        ExerciseType::Rest => text.blue(),
    }
}

/// Format a workout plan with its steps.
pub fn format_plan_pretty(plan: &WorkoutPlan) -> String {
    let mut output = format!("{}\n", plan.title.bold());

    let mut meta = Vec::new();
    if !plan.focus.is_empty() {
        meta.push(plan.focus.clone());
    }
    if !plan.difficulty.is_empty() {
        meta.push(plan.difficulty.clone());
    }
    meta.push(format_minutes(plan.total_duration_minutes()));
    output.push_str(&format!("{}\n", meta.join(" · ").dimmed()));
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (index, step) in plan.steps.iter().enumerate() {
        output.push_str(&format_step_line(index, step));
        output.push('\n');
        if !step.description.is_empty() {
            output.push_str(&format!("      {}\n", step.description.dimmed()));
        }
    }

    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{} steps, {} of exercise",
        plan.steps.len(),
        format_mmss(u32::try_from(plan.total_step_seconds()).unwrap_or(u32::MAX))
    ));
    output
}

/// One numbered step line, e.g. ` 1. Squats  Strength  0:45  15 reps`.
pub fn format_step_line(index: usize, step: &ExerciseStep) -> String {
    let mut line = format!(
        "{:>2}. {:<24} {:<9} {:>6}",
        index + 1,
        step.name.bold(),
        colorize_type(step.exercise_type, step.exercise_type.display_name()),
        format_mmss(step.duration_secs)
    );
    if let Some(reps) = &step.reps {
        line.push_str(&format!("  {}", reps.cyan()));
    }
    line
}

/// Format log entries, newest first as given.
pub fn format_logs_pretty(logs: &[WorkoutLog]) -> String {
    if logs.is_empty() {
        return "Workout log (0 entries)\n  No workouts logged".to_string();
    }

    let mut output = format!("Workout log ({} entries)\n", logs.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for log in logs {
        output.push_str(&format_log_pretty(log));
        output.push('\n');
    }

    let total: u64 = logs.iter().map(|l| u64::from(l.duration_minutes)).sum();
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}",
        format_minutes(u32::try_from(total).unwrap_or(u32::MAX))
    ));
    output
}

/// One log entry on a single line.
pub fn format_log_pretty(log: &WorkoutLog) -> String {
    let id = log
        .id
        .map_or_else(|| "-".to_string(), |id| format!("#{id}"));
    let mut line = format!(
        "{:>5}  {}  {}  {}",
        id.dimmed(),
        log.logged_at_local().format("%Y-%m-%d %H:%M").to_string().yellow(),
        log.title.bold(),
        format!("{}m", log.duration_minutes).cyan()
    );
    if !log.focus.is_empty() {
        line.push_str(&format!("  {}", log.focus.dimmed()));
    }
    if !log.difficulty.is_empty() {
        line.push_str(&format!("  {}", log.difficulty.dimmed()));
    }
    line
}

/// `[index/total] name m:ss` for a step that is about to play.
pub fn format_step_banner(index: usize, total: usize, step: &ExerciseStep) -> String {
    format!(
        "[{}/{}] {} {}",
        index + 1,
        total,
        colorize_type(step.exercise_type, &step.name),
        format_mmss(step.duration_secs).bold()
    )
}

/// Completion banner printed after a session finishes.
pub fn format_session_complete(summary: &WorkoutSummary, recorded: bool) -> String {
    let mut output = format!("{}\n", "Session Complete!".green().bold());
    output.push_str(&format!(
        "{} · {}",
        summary.title,
        format_minutes(summary.total_duration_minutes)
    ));
    if recorded {
        output.push_str(&format!("\n{}", "Logged to your workout history.".dimmed()));
    }
    output
}
