//! Progress reports.
//!
//! Summarises the workout log: the last seven days of activity, totals,
//! streaks, muscle group recovery and the week-over-week trend.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::recovery::{recovery_status, RecoveryLevel, RecoveryStatus};
use crate::config::ProgressConfig;
use crate::features::log::WorkoutLog;
use crate::features::session::{format_minutes, render_progress_bar};

/// Minutes trained on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    /// Short weekday name
    pub label: String,
    /// Calendar date
    pub date: NaiveDate,
    /// Minutes logged that day
    pub minutes: u64,
}

/// This week against the one before.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendComparison {
    /// Minutes in the last seven days
    pub this_week_minutes: u64,
    /// Minutes in the seven days before that
    pub last_week_minutes: u64,
    /// `this_week - last_week`
    pub diff: i64,
}

/// Progress report data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Last seven days, oldest first
    pub weekly: Vec<DayActivity>,
    /// Minutes across the whole log
    pub total_minutes: u64,
    /// Number of logged workouts
    pub sessions_completed: usize,
    /// Distinct days with at least one workout
    pub active_days: usize,
    /// Consecutive active days ending today or yesterday
    pub current_streak: usize,
    /// Per muscle group recovery
    pub recovery: Vec<RecoveryStatus>,
    /// Week-over-week comparison
    pub trend: TrendComparison,
}

impl ProgressReport {
    /// Build a report from every log entry, as seen at `now`.
    ///
    /// Calendar days are taken in `now`'s timezone.
    #[must_use]
    pub fn generate<Tz: TimeZone>(
        logs: &[WorkoutLog],
        now: &DateTime<Tz>,
        config: &ProgressConfig,
    ) -> Self {
        let tz = now.timezone();
        let day_of = |log: &WorkoutLog| log.logged_at.with_timezone(&tz).date_naive();
        let today = now.date_naive();

        let weekly = (0..7)
            .rev()
            .map(|days_ago| {
                let date = today - Duration::days(days_ago);
                let minutes = logs
                    .iter()
                    .filter(|log| day_of(*log) == date)
                    .map(|log| u64::from(log.duration_minutes))
                    .sum();
                DayActivity {
                    label: weekday_label(date.weekday()).to_string(),
                    date,
                    minutes,
                }
            })
            .collect();

        let total_minutes = logs.iter().map(|log| u64::from(log.duration_minutes)).sum();
        let active: BTreeSet<NaiveDate> = logs.iter().map(day_of).collect();

        Self {
            weekly,
            total_minutes,
            sessions_completed: logs.len(),
            active_days: active.len(),
            current_streak: current_streak(&active, today),
            recovery: recovery_status(logs, now, config),
            trend: trend(logs, now),
        }
    }

    /// Format the report for display.
    #[must_use]
    pub fn format(&self) -> String {
        let mut lines = Vec::new();

        lines.push("📈 Progress".bold().to_string());
        lines.push("═".repeat(50));
        lines.push(String::new());

        if self.sessions_completed == 0 {
            lines.push("No workouts logged yet.".to_string());
            lines.push(String::new());
            lines.push(
                "Finish a session with 'fitcoach play <plan>' to unlock analytics."
                    .dimmed()
                    .to_string(),
            );
            return lines.join("\n");
        }

        lines.push("Summary".to_string());
        lines.push("─".repeat(40));
        lines.push(format!(
            "  Total time:          {}",
            format_minutes(u32::try_from(self.total_minutes).unwrap_or(u32::MAX))
        ));
        lines.push(format!("  Sessions completed:  {}", self.sessions_completed));
        lines.push(format!("  Active days:         {}", self.active_days));
        lines.push(format!("  Current streak:      {} days", self.current_streak));
        lines.push(String::new());

        lines.push("Last 7 Days".to_string());
        lines.push("─".repeat(40));
        let max_day = self.weekly.iter().map(|d| d.minutes).max().unwrap_or(0).max(1);
        for day in &self.weekly {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let bar_len = (day.minutes as f64 / max_day as f64 * 20.0) as usize;
            lines.push(format!(
                "  {} {:>4}m {}",
                day.label,
                day.minutes,
                "█".repeat(bar_len).cyan()
            ));
        }
        lines.push(String::new());

        lines.push("Recovery".to_string());
        lines.push("─".repeat(40));
        for status in &self.recovery {
            let label = match status.level {
                RecoveryLevel::Resting => status.level.label().red(),
                RecoveryLevel::Recovering => status.level.label().yellow(),
                RecoveryLevel::Ready => status.level.label().green(),
            };
            lines.push(format!(
                "  {:<11} {} {:>3}% {}",
                status.group,
                render_progress_bar(f64::from(status.percent) / 100.0, 10),
                status.percent,
                label
            ));
        }
        lines.push(String::new());

        lines.push("Trend".to_string());
        lines.push("─".repeat(40));
        lines.push(format!("  This week:  {}m", self.trend.this_week_minutes));
        lines.push(format!("  Last week:  {}m", self.trend.last_week_minutes));
        let diff = match self.trend.diff {
            d if d > 0 => format!("+{d}m").green(),
            d if d < 0 => format!("{d}m").red(),
            _ => "±0m".normal(),
        };
        lines.push(format!("  Change:     {diff}"));

        lines.join("\n")
    }
}

const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Consecutive active days ending today, or ending yesterday if today is idle.
fn current_streak(active: &BTreeSet<NaiveDate>, today: NaiveDate) -> usize {
    let mut day = if active.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while active.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }
    streak
}

fn trend<Tz: TimeZone>(logs: &[WorkoutLog], now: &DateTime<Tz>) -> TrendComparison {
    let now = now.with_timezone(&Utc);
    let one_week_ago = now - Duration::days(7);
    let two_weeks_ago = now - Duration::days(14);

    let sum = |pred: &dyn Fn(&WorkoutLog) -> bool| -> u64 {
        logs.iter()
            .filter(|log| pred(*log))
            .map(|log| u64::from(log.duration_minutes))
            .sum()
    };

    let this_week_minutes = sum(&|log| log.logged_at > one_week_ago);
    let last_week_minutes =
        sum(&|log| log.logged_at > two_weeks_ago && log.logged_at <= one_week_ago);

    TrendComparison {
        this_week_minutes,
        last_week_minutes,
        diff: i64::try_from(this_week_minutes).unwrap_or(i64::MAX)
            - i64::try_from(last_week_minutes).unwrap_or(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(minutes: u32, at: DateTime<Utc>) -> WorkoutLog {
        WorkoutLog::new("Session", "Full Body", "Medium", minutes, at)
    }

    fn now() -> DateTime<Utc> {
        // a Friday
        Utc.with_ymd_and_hms(2024, 5, 10, 18, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_log() {
        let report = ProgressReport::generate(&[], &now(), &ProgressConfig::default());
        assert_eq!(report.total_minutes, 0);
        assert_eq!(report.sessions_completed, 0);
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.weekly.len(), 7);
        assert!(report.weekly.iter().all(|d| d.minutes == 0));
        assert!(report.format().contains("No workouts logged yet"));
    }

    #[test]
    fn test_weekly_buckets() {
        let now = now();
        let logs = vec![
            log(20, now - Duration::hours(2)),
            log(15, now - Duration::hours(3)),
            log(30, now - Duration::days(2)),
            log(99, now - Duration::days(9)),
        ];

        let report = ProgressReport::generate(&logs, &now, &ProgressConfig::default());

        assert_eq!(report.weekly[6].label, "Fri");
        assert_eq!(report.weekly[6].minutes, 35);
        assert_eq!(report.weekly[4].label, "Wed");
        assert_eq!(report.weekly[4].minutes, 30);
        assert_eq!(report.weekly[0].label, "Sat");
        assert_eq!(report.total_minutes, 164);
        assert_eq!(report.sessions_completed, 4);
        assert_eq!(report.active_days, 3);
    }

    #[test]
    fn test_streak() {
        let now = now();
        let logs = vec![
            log(10, now - Duration::days(1)),
            log(10, now - Duration::days(2)),
            log(10, now - Duration::days(3)),
            log(10, now - Duration::days(5)),
        ];

        let report = ProgressReport::generate(&logs, &now, &ProgressConfig::default());
        assert_eq!(report.current_streak, 3);
        assert_eq!(report.active_days, 4);
    }

    #[test]
    fn test_streak_broken() {
        let now = now();
        let logs = vec![log(10, now - Duration::days(2))];
        let report = ProgressReport::generate(&logs, &now, &ProgressConfig::default());
        assert_eq!(report.current_streak, 0);
    }

    #[test]
    fn test_trend() {
        let now = now();
        let logs = vec![
            log(40, now - Duration::days(1)),
            log(25, now - Duration::days(8)),
            log(30, now - Duration::days(10)),
            log(50, now - Duration::days(20)),
        ];

        let report = ProgressReport::generate(&logs, &now, &ProgressConfig::default());
        assert_eq!(report.trend.this_week_minutes, 40);
        assert_eq!(report.trend.last_week_minutes, 55);
        assert_eq!(report.trend.diff, -15);
    }

    #[test]
    fn test_format_sections() {
        let now = now();
        let logs = vec![log(45, now - Duration::hours(1))];
        let text = ProgressReport::generate(&logs, &now, &ProgressConfig::default()).format();
        assert!(text.contains("Summary"));
        assert!(text.contains("Last 7 Days"));
        assert!(text.contains("Recovery"));
        assert!(text.contains("Trend"));
        assert!(text.contains("45 minutes"));
    }
}
