//! Path resolution for fitcoach configuration and data files.
//!
//! All fitcoach data is stored in one home directory, `~/.fitcoach/` unless
//! overridden with `--home` or `FITCOACH_HOME`:
//! - `config.yaml` - Main configuration file
//! - `fitcoach.db` - SQLite workout log
//! - `logs/` - Diagnostic logs

use std::path::PathBuf;

use crate::error::FitcoachError;

/// Paths to fitcoach configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.fitcoach/`
    pub root: PathBuf,
    /// Config file: `~/.fitcoach/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.fitcoach/fitcoach.db`
    pub database: PathBuf,
    /// Log directory: `~/.fitcoach/logs/`
    pub logs: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FitcoachError> {
        let home = std::env::var("HOME").map_err(|_| {
            FitcoachError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".fitcoach")))
    }

    /// Use `root` when given, otherwise the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, FitcoachError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("fitcoach.db"),
            logs: root.join("logs"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FitcoachError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    FitcoachError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}
