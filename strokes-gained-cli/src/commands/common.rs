//! Common types and utilities shared across CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::de::DeserializeOwned;
use strokes_gained::config::{ConfigFile, OutputFormat};
use strokes_gained::{LieType, Scorer};
use tracing::debug;

use crate::error::CliError;

/// Path argument meaning "read standard input".
pub const STDIN_PATH: &str = "-";

/// Report format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormatArg {
    /// Aligned table for reading in a terminal
    Table,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => OutputFormat::Table,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Lie selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum LieArg {
    Tee,
    Fairway,
    Rough,
    Bunker,
    Green,
    Fringe,
    Recovery,
}

impl From<LieArg> for LieType {
    fn from(arg: LieArg) -> Self {
        match arg {
            LieArg::Tee => LieType::Tee,
            LieArg::Fairway => LieType::Fairway,
            LieArg::Rough => LieType::Rough,
            LieArg::Bunker => LieType::Bunker,
            LieArg::Green => LieType::Green,
            LieArg::Fringe => LieType::Fringe,
            LieArg::Recovery => LieType::Recovery,
        }
    }
}

/// Resolve the report format from CLI args and config.
pub fn resolve_format(cli_format: Option<OutputFormatArg>, config: &ConfigFile) -> OutputFormat {
    cli_format
        .map(OutputFormat::from)
        .unwrap_or(config.output.format)
}

/// Scorer using the configured thresholds.
pub fn scorer_from(config: &ConfigFile) -> Scorer {
    Scorer::new(config.scoring.to_scoring_config())
}

/// Read and parse a JSON document from a file, or stdin for `-`.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Read {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    debug!(path = %path.display(), bytes = contents.len(), "Read input");

    serde_json::from_str(&contents).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}
