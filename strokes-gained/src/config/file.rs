//! Configuration file model and INI persistence.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use tracing::debug;

use super::keys::ConfigKey;
use super::{config_file_path, ConfigError};
use crate::scoring::{ScoringConfig, DEFAULT_AROUND_GREEN_YARDS, DEFAULT_HOLED_THRESHOLD_YARDS};

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON in the canonical wire format.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err("expected 'table' or 'json'".to_string()),
        }
    }
}

/// `[scoring]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSettings {
    pub holed_threshold_yards: f64,
    pub around_green_yards: f64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            holed_threshold_yards: DEFAULT_HOLED_THRESHOLD_YARDS,
            around_green_yards: DEFAULT_AROUND_GREEN_YARDS,
        }
    }
}

impl ScoringSettings {
    /// Thresholds for a [`Scorer`](crate::Scorer).
    pub fn to_scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            holed_threshold_yards: self.holed_threshold_yards,
            around_green_yards: self.around_green_yards,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Default level filter when `RUST_LOG` is not set.
    pub level: String,

    /// Optional log file, written in addition to stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    pub scoring: ScoringSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_file_path())
    }

    /// Load from a specific file, falling back to defaults if absent.
    ///
    /// Unknown sections and keys are ignored. Known keys with unusable
    /// values fail the load.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = Self::default();
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(config);
        }

        let ini = Ini::load_from_file(path)?;
        for key in ConfigKey::ALL {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }

        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(config_file_path())
    }

    /// Save to a specific file, creating parent directories as needed.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut ini = Ini::new();
        for key in ConfigKey::ALL {
            let value = key.get(self);
            // Unset optional values are left out rather than written empty
            if value.is_empty() {
                continue;
            }
            ini.with_section(Some(key.section())).set(key.key(), value);
        }
        ini.write_to_file(path)?;

        debug!(path = %path.display(), "Saved config file");
        Ok(())
    }
}
