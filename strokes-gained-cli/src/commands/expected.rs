//! `expected`: look up baseline expected strokes.

use clap::Args;
use serde::Serialize;
use strokes_gained::config::{ConfigFile, OutputFormat};
use strokes_gained::{expected_strokes, LieType, Scorer};

use super::common::{resolve_format, scorer_from, LieArg, OutputFormatArg};
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for `expected`.
#[derive(Debug, Args)]
pub struct ExpectedArgs {
    /// Distance to the hole in yards
    #[arg(short, long, allow_negative_numbers = true)]
    pub distance: f64,

    /// Lie to look up (all lies when omitted)
    #[arg(short, long, value_enum)]
    pub lie: Option<LieArg>,

    /// Report format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Expectation {
    lie: LieType,
    #[serde(serialize_with = "strokes_gained::display::serialize_rounded")]
    expected_strokes: f64,
    category: strokes_gained::ShotCategory,
}

fn expectations(
    distance: f64,
    lies: &[LieType],
    scorer: &Scorer,
) -> Result<Vec<Expectation>, CliError> {
    lies.iter()
        .map(|&lie| -> Result<Expectation, CliError> {
            Ok(Expectation {
                lie,
                expected_strokes: expected_strokes(distance, lie)?,
                category: scorer.categorize(distance, lie),
            })
        })
        .collect()
}

/// Run the expected command.
pub fn run(args: ExpectedArgs, config: &ConfigFile) -> Result<(), CliError> {
    let lies = match args.lie {
        Some(lie) => vec![LieType::from(lie)],
        None => LieType::ALL.to_vec(),
    };
    let rows = expectations(args.distance, &lies, &scorer_from(config))?;

    match resolve_format(args.format, config) {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            println!("{} yards", args.distance);
            for row in &rows {
                println!(
                    "  {:<9} {:>5.2}  {}",
                    row.lie.as_str(),
                    row.expected_strokes,
                    row.category.display_name()
                );
            }
            Ok(())
        }
    }
}
