//! Tracing setup.
//!
//! Everything goes to `<home>/logs/fitcoach.log`. Warnings and errors are
//! also echoed to stderr, except while the full-screen player owns the
//! terminal. `FITCOACH_LOG` takes an `EnvFilter` directive and overrides `-v`.

use std::io::{self, IsTerminal};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::Paths;
use crate::error::FitcoachError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "FITCOACH_LOG";

/// Log file name inside the logs directory.
pub const LOG_FILE: &str = "fitcoach.log";

/// Default directive for a `-v` count.
#[must_use]
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "fitcoach=info",
        1 => "fitcoach=debug",
        _ => "fitcoach=trace",
    }
}

/// Filter from `FITCOACH_LOG`, falling back to the `-v` count.
#[must_use]
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if the logs directory cannot be created or a subscriber
/// is already installed.
pub fn init(
    paths: &Paths,
    verbosity: u8,
    echo_stderr: bool,
) -> Result<WorkerGuard, FitcoachError> {
    std::fs::create_dir_all(&paths.logs)?;

    let appender = tracing_appender::rolling::never(&paths.logs, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false);
    let stderr_layer = echo_stderr.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(io::stderr().is_terminal())
            .with_target(false)
            .without_time()
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| FitcoachError::Config(format!("Failed to initialize logging: {e}")))?;

    tracing::debug!(log_dir = %paths.logs.display(), verbosity, "logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(0), "fitcoach=info");
        assert_eq!(default_directive(1), "fitcoach=debug");
        assert_eq!(default_directive(2), "fitcoach=trace");
        assert_eq!(default_directive(9), "fitcoach=trace");
    }
}
