//! Command implementations for fitcoach.
//!
//! Every command returns the text to print; `main` does the printing.

mod log;
mod plan;
mod play;
mod progress;

pub use log::log;
pub use plan::plan;
pub use play::play;
pub use progress::progress;

use std::io::IsTerminal;
use std::path::PathBuf;

use crate::cli::args::{OutputFormat, PlayArgs};
use crate::config::{ColorSetting, Config, Paths};
use crate::error::FitcoachError;
use crate::features::log::WorkoutLogStorage;
use crate::features::shell::{completion_install_instructions, generate_completions};
use crate::storage::Database;

/// Everything a command needs from the environment.
pub struct Context {
    /// Resolved data directories
    pub paths: Paths,
    /// Loaded configuration
    pub config: Config,
    /// Output format for this invocation
    pub format: OutputFormat,
}

impl Context {
    /// Resolve paths, load the config and pick the output format.
    ///
    /// `output` wins over the configured default.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory is unknown, cannot be created,
    /// or the config file is malformed.
    pub fn load(
        home: Option<PathBuf>,
        output: Option<OutputFormat>,
    ) -> Result<Self, FitcoachError> {
        let paths = Paths::resolve(home)?;
        paths.ensure_dirs()?;
        let config = Config::load_from_path(&paths.config_file)?;
        let format = output.unwrap_or(config.general.default_output);

        match config.general.color {
            ColorSetting::Always => colored::control::set_override(true),
            ColorSetting::Never => colored::control::set_override(false),
            ColorSetting::Auto => {}
        }

        Ok(Self {
            paths,
            config,
            format,
        })
    }

    /// Context rooted at `root` with default settings.
    #[must_use]
    pub fn with_root(root: PathBuf, format: OutputFormat) -> Self {
        Self {
            paths: Paths::with_root(root),
            config: Config::default(),
            format,
        }
    }

    /// Whether `play` should use the line-oriented player.
    ///
    /// True for `--plain`, `player.plain`, JSON output, or when stdout is not
    /// a terminal.
    #[must_use]
    pub fn plays_plain(&self, args: &PlayArgs) -> bool {
        self.plays_plain_on(args, std::io::stdout().is_terminal())
    }

    fn plays_plain_on(&self, args: &PlayArgs, stdout_is_terminal: bool) -> bool {
        args.plain
            || self.config.player.plain
            || self.format == OutputFormat::Json
            || !stdout_is_terminal
    }

    /// Open the workout log, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated.
    pub fn log_storage(&self) -> Result<WorkoutLogStorage, FitcoachError> {
        self.paths.ensure_dirs()?;
        let db = Database::open_at(&self.paths.database)?;
        Ok(WorkoutLogStorage::with_database(db))
    }
}

/// Execute completions command
///
/// # Errors
///
/// Returns an error if the script cannot be generated.
pub fn completions(shell: clap_complete::Shell, install: bool) -> Result<String, FitcoachError> {
    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}
