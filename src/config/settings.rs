//! Configuration settings for fitcoach.
//!
//! Settings are loaded from `config.yaml` in the fitcoach home directory.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::FitcoachError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Session player settings.
    pub player: PlayerConfig,
    /// Progress report settings.
    pub progress: ProgressConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Session player settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Length of one countdown tick in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Write a workout log entry when a session finishes.
    #[serde(default = "default_true")]
    pub record_on_finish: bool,
    /// Use the line-oriented player instead of the full-screen one.
    #[serde(default)]
    pub plain: bool,
}

/// Progress report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    /// A muscle group trained less than this many hours ago is resting.
    #[serde(default = "default_resting_hours")]
    pub resting_hours: u32,
    /// A muscle group trained less than this many hours ago is recovering.
    #[serde(default = "default_recovering_hours")]
    pub recovering_hours: u32,
    /// Entries shown by `log list` when no limit is given.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_tick_interval() -> u64 {
    1000
}

const fn default_true() -> bool {
    true
}

const fn default_resting_hours() -> u32 {
    24
}

const fn default_recovering_hours() -> u32 {
    48
}

const fn default_recent_limit() -> usize {
    10
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            record_on_finish: default_true(),
            plain: false,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            resting_hours: default_resting_hours(),
            recovering_hours: default_recovering_hours(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl PlayerConfig {
    /// Tick length as a `Duration`.
    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FitcoachError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FitcoachError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FitcoachError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        if config.progress.recovering_hours < config.progress.resting_hours {
            tracing::warn!(
                resting = config.progress.resting_hours,
                recovering = config.progress.recovering_hours,
                "recovering_hours is shorter than resting_hours"
            );
        }

        Ok(config)
    }
}
