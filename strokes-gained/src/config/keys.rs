//! Addressable configuration keys (`section.key`).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::file::{ConfigFile, OutputFormat};
use super::ConfigError;

/// Log levels accepted in `logging.level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single configuration setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ScoringHoledThresholdYards,
    ScoringAroundGreenYards,
    OutputFormat,
    OutputColor,
    LoggingLevel,
    LoggingFile,
}

impl ConfigKey {
    /// Every key, in file order.
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::ScoringHoledThresholdYards,
        ConfigKey::ScoringAroundGreenYards,
        ConfigKey::OutputFormat,
        ConfigKey::OutputColor,
        ConfigKey::LoggingLevel,
        ConfigKey::LoggingFile,
    ];

    /// INI section holding this key.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::ScoringHoledThresholdYards | ConfigKey::ScoringAroundGreenYards => {
                "scoring"
            }
            ConfigKey::OutputFormat | ConfigKey::OutputColor => "output",
            ConfigKey::LoggingLevel | ConfigKey::LoggingFile => "logging",
        }
    }

    /// Key name within its section.
    pub fn key(&self) -> &'static str {
        match self {
            ConfigKey::ScoringHoledThresholdYards => "holed_threshold_yards",
            ConfigKey::ScoringAroundGreenYards => "around_green_yards",
            ConfigKey::OutputFormat => "format",
            ConfigKey::OutputColor => "color",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingFile => "file",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key())
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigKey::ScoringHoledThresholdYards => "Shots ending closer than this count as holed",
            ConfigKey::ScoringAroundGreenYards => "Radius of the around-green category",
            ConfigKey::OutputFormat => "Report format: table or json",
            ConfigKey::OutputColor => "Colour table output",
            ConfigKey::LoggingLevel => "Log level when RUST_LOG is unset",
            ConfigKey::LoggingFile => "Also write logs to this file",
        }
    }

    /// Current value as a string. Unset optional values are empty.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ScoringHoledThresholdYards => {
                config.scoring.holed_threshold_yards.to_string()
            }
            ConfigKey::ScoringAroundGreenYards => config.scoring.around_green_yards.to_string(),
            ConfigKey::OutputFormat => config.output.format.to_string(),
            ConfigKey::OutputColor => config.output.color.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match self {
            ConfigKey::ScoringHoledThresholdYards => {
                config.scoring.holed_threshold_yards = self.parse_yards(value)?;
            }
            ConfigKey::ScoringAroundGreenYards => {
                config.scoring.around_green_yards = self.parse_yards(value)?;
            }
            ConfigKey::OutputFormat => {
                config.output.format = value
                    .parse::<OutputFormat>()
                    .map_err(|reason| self.invalid(value, reason))?;
            }
            ConfigKey::OutputColor => {
                config.output.color = self.parse_bool(value)?;
            }
            ConfigKey::LoggingLevel => {
                let level = value.to_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(self.invalid(
                        value,
                        format!("expected one of {}", LOG_LEVELS.join(", ")),
                    ));
                }
                config.logging.level = level;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }
        Ok(())
    }

    fn parse_yards(&self, value: &str) -> Result<f64, ConfigError> {
        let yards: f64 = value
            .parse()
            .map_err(|_| self.invalid(value, "expected a number of yards"))?;
        if !(yards.is_finite() && yards >= 0.0) {
            return Err(self.invalid(value, "must be a non-negative number"));
        }
        Ok(yards)
    }

    fn parse_bool(&self, value: &str) -> Result<bool, ConfigError> {
        match value.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(self.invalid(value, "expected true or false")),
        }
    }

    fn invalid(&self, value: &str, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.key())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.name() == needle)
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
