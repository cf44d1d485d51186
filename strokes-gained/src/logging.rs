//! Logging setup.
//!
//! Log output always goes to stderr so that reports on stdout stay clean
//! for piping. A log file can be added from `[logging] file`; it is written
//! through a non-blocking appender and never contains ANSI colour codes.
//!
//! # Filter Resolution
//!
//! | Source              | Used when                          |
//! |---------------------|------------------------------------|
//! | `RUST_LOG`          | set and non-empty                  |
//! | `--verbose`         | `RUST_LOG` unset; raises to debug  |
//! | `[logging] level`   | otherwise                          |

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingSettings;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{0}'")]
    InvalidFilter(String),

    #[error("Cannot log to {path}: {reason}")]
    LogFile { path: PathBuf, reason: String },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Keeps the file writer alive. Dropping it flushes pending log lines.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Filter directive to use when `RUST_LOG` is not set.
pub fn default_directive(level: &str, verbose: bool) -> String {
    let level = level.trim().to_lowercase();
    if verbose && matches!(level.as_str(), "info" | "warn" | "error") {
        "debug".to_string()
    } else {
        level
    }
}

/// Install the global tracing subscriber.
pub fn init_logging(
    settings: &LoggingSettings,
    verbose: bool,
) -> Result<LoggingGuard, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = default_directive(&settings.level, verbose);
            EnvFilter::try_new(&directive).map_err(|_| LoggingError::InvalidFilter(directive))?
        }
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, file_guard) = match &settings.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard { _file: file_guard })
}

fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggingError> {
    let file_name = path.file_name().ok_or_else(|| LoggingError::LogFile {
        path: path.to_path_buf(),
        reason: "not a file path".to_string(),
    })?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| LoggingError::LogFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_raises_quiet_levels() {
        assert_eq!(default_directive("info", true), "debug");
        assert_eq!(default_directive("WARN", true), "debug");
        assert_eq!(default_directive("trace", true), "trace");
    }

    #[test]
    fn test_configured_level_used_without_verbose() {
        assert_eq!(default_directive(" warn ", false), "warn");
        assert_eq!(default_directive("debug", false), "debug");
    }

    #[test]
    fn test_directory_is_not_a_log_file() {
        let result = file_writer(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::LogFile { .. })));
    }
}
