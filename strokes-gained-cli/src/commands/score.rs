//! `score`: evaluate recorded shot lists.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use strokes_gained::config::{ConfigFile, OutputFormat};
use strokes_gained::{ShotRecord, StrokesGainedSummary};
use tracing::info;

use super::common::{read_json, resolve_format, scorer_from, OutputFormatArg};
use crate::error::CliError;
use crate::output::{print_json, summary_table};

/// Arguments for `score`.
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// JSON files holding an array of shot records ("-" for stdin)
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Report format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,
}

#[derive(Serialize)]
struct FileSummary<'a> {
    file: String,
    summary: &'a StrokesGainedSummary,
}

/// Run the score command.
pub fn run(args: ScoreArgs, config: &ConfigFile) -> Result<(), CliError> {
    let rounds = args
        .files
        .iter()
        .map(|path| read_json::<Vec<ShotRecord>>(path))
        .collect::<Result<Vec<_>, _>>()?;

    let summaries = scorer_from(config).summarize_many(&rounds)?;
    info!(files = summaries.len(), "Scored shot files");

    match resolve_format(args.format, config) {
        OutputFormat::Json if summaries.len() == 1 => print_json(&summaries[0]),
        OutputFormat::Json => {
            let tagged: Vec<FileSummary<'_>> = args
                .files
                .iter()
                .zip(&summaries)
                .map(|(path, summary)| FileSummary {
                    file: path.display().to_string(),
                    summary,
                })
                .collect();
            print_json(&tagged)
        }
        OutputFormat::Table => {
            for (index, (path, summary)) in args.files.iter().zip(&summaries).enumerate() {
                if index > 0 {
                    println!();
                }
                if summaries.len() > 1 {
                    println!("== {} ==", path.display());
                }
                print!("{}", summary_table(summary));
            }
            Ok(())
        }
    }
}
