//! CLI error type.

use std::io;
use std::path::PathBuf;

use strokes_gained::config::ConfigError;
use strokes_gained::logging::LoggingError;
use strokes_gained::{CalibrationError, ScoringError};
use thiserror::Error;

/// Errors surfaced to the user by a command.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0}")]
    ConfigFile(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Calibration failed: {0}")]
    Calibration(#[from] CalibrationError),

    #[error("Cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}
