//! Error types for fitcoach.

use thiserror::Error;

/// Errors that can occur while loading, playing or recording workouts.
#[derive(Debug, Error)]
pub enum FitcoachError {
    /// A workout plan that cannot be played (for example, no steps).
    #[error("Invalid session: {0}")]
    InvalidSession(String),

    /// Configuration or path resolution failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// `SQLite` failure.
    #[error("Database error: {0}")]
    Database(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// YAML (de)serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup, drawing or input failure.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl FitcoachError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidSession(_) | Self::Parse(_) | Self::Yaml(_) => 2,
            Self::NotFound(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_session_message() {
        let err = FitcoachError::InvalidSession("no steps".to_string());
        assert_eq!(err.to_string(), "Invalid session: no steps");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FitcoachError = io.into();
        assert!(matches!(err, FitcoachError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
