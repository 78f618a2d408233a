use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(about = "A guided workout player with a local training log")]
#[command(long_about = "fitcoach - guided workouts in your terminal

Plays workout plans step by step with a live countdown, records finished
sessions in a local log, and summarises your training over time.

QUICK START:
  fitcoach plan show legs.yaml     Inspect a plan
  fitcoach play legs.yaml          Play it full screen
  fitcoach log list                See what you've done
  fitcoach progress                Weekly activity, streaks and recovery

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  fitcoach <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding config, database and logs (default: ~/.fitcoach)
    #[arg(long, env = "FITCOACH_HOME", global = true)]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a workout plan
    ///
    /// Runs the plan one step at a time with a per-second countdown.
    /// Finished sessions are written to the workout log.
    ///
    /// Controls (full screen):
    ///   space / p       Pause or resume
    ///   n / → / enter   Skip to the next step
    ///   q / esc         Close without recording
    ///
    /// # Examples
    ///
    ///   fitcoach play legs.yaml
    ///   fitcoach play legs.yaml --plain
    ///   fitcoach play hiit.json --no-record
    #[command(alias = "p")]
    Play(PlayArgs),

    /// Inspect workout plans
    Plan(PlanArgs),

    /// Manage the workout log
    ///
    /// Without a subcommand, lists the most recent entries.
    #[command(alias = "l")]
    Log(LogArgs),

    /// Show progress analytics
    ///
    /// Last seven days of activity, total time, streak, muscle group
    /// recovery and the week-over-week trend.
    Progress,

    /// Generate shell completions
    ///
    /// Example: fitcoach completions bash > ~/.bash_completion.d/fitcoach
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for `play`.
#[derive(Args)]
pub struct PlayArgs {
    /// Plan file (YAML, or JSON with a .json extension)
    pub plan: PathBuf,

    /// Print progress lines instead of the full-screen player
    #[arg(long)]
    pub plain: bool,

    /// Don't write a log entry when the session finishes
    #[arg(long)]
    pub no_record: bool,

    /// Countdown tick length in milliseconds (default from config: 1000)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,
}

/// Arguments for `plan`.
#[derive(Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    pub command: PlanCommands,
}

/// Plan subcommands.
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Print a plan and its steps
    Show {
        /// Plan file
        plan: PathBuf,
    },

    /// Check that a plan can be played
    Validate {
        /// Plan file
        plan: PathBuf,
    },
}

/// Arguments for `log`.
#[derive(Args)]
pub struct LogArgs {
    #[command(subcommand)]
    pub command: Option<LogCommands>,
}

/// Log subcommands.
#[derive(Subcommand)]
pub enum LogCommands {
    /// List recent entries, newest first
    List {
        /// Maximum entries to show (default from config: 10)
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Only entries from this local calendar day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Record a workout done outside the player
    Add {
        /// Session title
        #[arg(long, short = 't')]
        title: String,

        /// Focus label, e.g. "Upper Body"
        #[arg(long, short = 'f', default_value = "")]
        focus: String,

        /// Difficulty label
        #[arg(long, short = 'd', default_value = "")]
        difficulty: String,

        /// Length in minutes
        #[arg(long, short = 'm')]
        minutes: u32,
    },

    /// Delete one entry
    Delete {
        /// Entry ID as shown by 'fitcoach log list'
        id: i64,
    },

    /// Delete every entry
    Clear {
        /// Confirm deletion
        #[arg(long)]
        force: bool,
    },
}
