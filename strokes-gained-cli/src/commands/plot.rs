//! `plot`: score a hole described by plotted image positions.

use std::path::PathBuf;

use clap::Args;
use strokes_gained::config::{ConfigFile, OutputFormat};
use strokes_gained::plotter::HolePlot;
use tracing::info;

use super::common::{read_json, resolve_format, scorer_from, OutputFormatArg};
use crate::error::CliError;
use crate::output::{print_json, summary_table};

/// Arguments for `plot`.
#[derive(Debug, Args)]
pub struct PlotArgs {
    /// JSON hole plot: tee and pin positions, yardage and plotted shots ("-" for stdin)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the derived shot records instead of scoring them
    #[arg(long)]
    pub records: bool,

    /// Report format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,
}

/// Run the plot command.
pub fn run(args: PlotArgs, config: &ConfigFile) -> Result<(), CliError> {
    let hole: HolePlot = read_json(&args.file)?;
    let records = hole.shot_records()?;
    info!(
        shots = records.len(),
        yardage = hole.hole_yardage,
        "Converted plotted hole"
    );

    if args.records {
        return print_json(&records);
    }

    let summary = scorer_from(config).summarize(&records)?;
    match resolve_format(args.format, config) {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Table => {
            print!("{}", summary_table(&summary));
            Ok(())
        }
    }
}
