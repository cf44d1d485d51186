//! `calibrate`: derive a pixel scale and measure points against it.

use clap::Args;
use serde::Serialize;
use strokes_gained::config::{ConfigFile, OutputFormat};
use strokes_gained::display::round2;
use strokes_gained::plotter::suggested_lie;
use strokes_gained::{Calibration, LieType, Point};

use super::common::{resolve_format, OutputFormatArg};
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for `calibrate`.
#[derive(Debug, Args)]
pub struct CalibrateArgs {
    /// Tee position as "x,y" in image pixels
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub tee: Point,

    /// Pin position as "x,y" in image pixels
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    pub pin: Point,

    /// Real-world tee-to-pin distance in yards
    #[arg(long, allow_negative_numbers = true)]
    pub yardage: f64,

    /// Point to measure against the pin (repeatable)
    #[arg(long = "point", value_name = "X,Y", allow_hyphen_values = true)]
    pub points: Vec<Point>,

    /// Report format (defaults to output.format from config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormatArg>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Measurement {
    point: Point,
    #[serde(serialize_with = "strokes_gained::display::serialize_rounded")]
    distance_yards: f64,
    suggested_lie: LieType,
}

#[derive(Serialize)]
struct CalibrationReport {
    calibration: Calibration,
    measurements: Vec<Measurement>,
}

/// Run the calibrate command.
pub fn run(args: CalibrateArgs, config: &ConfigFile) -> Result<(), CliError> {
    let calibration = Calibration::new(args.tee, args.pin, args.yardage)?;
    let measurements: Vec<Measurement> = args
        .points
        .iter()
        .map(|&point| {
            let distance_yards = calibration.distance_to_pin(point);
            Measurement {
                point,
                distance_yards,
                suggested_lie: suggested_lie(distance_yards),
            }
        })
        .collect();

    match resolve_format(args.format, config) {
        OutputFormat::Json => print_json(&CalibrationReport {
            calibration,
            measurements,
        }),
        OutputFormat::Table => {
            println!("Tee:             {}", calibration.tee_position());
            println!("Pin:             {}", calibration.pin_position());
            println!("Hole yardage:    {}", calibration.hole_yardage());
            println!("Pixels per yard: {:.4}", calibration.pixels_per_yard());
            if !measurements.is_empty() {
                println!();
                for m in &measurements {
                    println!(
                        "{:<20} {:>8.2} yd  {}",
                        m.point.to_string(),
                        round2(m.distance_yards),
                        m.suggested_lie
                    );
                }
            }
            Ok(())
        }
    }
}
