//! Configuration file management.
//!
//! Settings live in an INI file under the platform configuration directory
//! (`~/.config/strokes-gained/config.ini` on Linux). A missing file is not an
//! error: every setting has a default.
//!
//! # Example Configuration (INI)
//!
//! ```ini
//! [scoring]
//! holed_threshold_yards = 0.5
//! around_green_yards = 50
//!
//! [output]
//! format = table
//! color = true
//!
//! [logging]
//! level = info
//! file = /var/log/strokes-gained.log
//! ```

mod file;
mod keys;

pub use file::{ConfigFile, LoggingSettings, OutputFormat, OutputSettings, ScoringSettings};
pub use keys::ConfigKey;

use std::path::PathBuf;

use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Directory under the platform config dir holding our files.
pub const CONFIG_DIR_NAME: &str = "strokes-gained";

/// Errors that can occur while loading, saving or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Failed to parse config file: {0}")]
    Parse(String),

    /// A `section.key` name that does not exist.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// A value that cannot be used for its key.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl From<ini::Error> for ConfigError {
    fn from(e: ini::Error) -> Self {
        match e {
            ini::Error::Io(e) => ConfigError::Io(e),
            ini::Error::Parse(e) => ConfigError::Parse(e.to_string()),
        }
    }
}

/// Directory holding the configuration file.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Default configuration file path.
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_path_layout() {
        let path = config_file_path();
        assert!(path.ends_with("strokes-gained/config.ini"));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            key: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "expected table or json".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("xml"));
        assert!(message.contains("output.format"));
    }
}
