//! Strokes Gained command-line interface.

mod commands;
mod error;
mod output;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use strokes_gained::config::{config_file_path, ConfigFile};
use strokes_gained::logging::init_logging;
use tracing::debug;

use commands::calibrate::CalibrateArgs;
use commands::config::ConfigCommands;
use commands::expected::ExpectedArgs;
use commands::plot::PlotArgs;
use commands::score::ScoreArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "strokes-gained")]
#[command(version, about = "Score golf shots against tour-average baselines", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this configuration file instead of the default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score shot records from JSON files
    Score(ScoreArgs),

    /// Score a hole plotted on an image
    Plot(PlotArgs),

    /// Compute pixels per yard and measure points
    Calibrate(CalibrateArgs),

    /// Show baseline expected strokes for a distance
    Expected(ExpectedArgs),

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);
    let loaded = ConfigFile::load_from(&config_path);

    let logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    let _guard = init_logging(&logging, cli.verbose)?;
    debug!(config = %config_path.display(), "Starting");

    // Config commands must work even when the file is broken
    if let Commands::Config { command } = cli.command {
        return commands::config::run(command, &config_path);
    }

    let config = loaded?;
    if !config.output.color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Commands::Score(args) => commands::score::run(args, &config),
        Commands::Plot(args) => commands::plot::run(args, &config),
        Commands::Calibrate(args) => commands::calibrate::run(args, &config),
        Commands::Expected(args) => commands::expected::run(args, &config),
        Commands::Config { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "strokes-gained",
            "expected",
            "--distance",
            "150",
            "--lie",
            "bunker",
            "-v",
            "--config",
            "/tmp/sg.ini",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/sg.ini")));
        match cli.command {
            Commands::Expected(args) => {
                assert_eq!(args.distance, 150.0);
                assert!(args.lie.is_some());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_calibrate_parses_points() {
        let cli = Cli::try_parse_from([
            "strokes-gained",
            "calibrate",
            "--tee",
            "0,0",
            "--pin",
            "400,0",
            "--yardage",
            "400",
            "--point",
            "100,0",
            "--point",
            "-5,20",
        ])
        .unwrap();

        match cli.command {
            Commands::Calibrate(args) => {
                assert_eq!(args.pin, strokes_gained::Point::new(400.0, 0.0));
                assert_eq!(args.points.len(), 2);
                assert_eq!(args.points[1], strokes_gained::Point::new(-5.0, 20.0));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
