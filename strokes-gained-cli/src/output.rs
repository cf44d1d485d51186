//! Report rendering.
//!
//! Tables are coloured by performance band when colours are enabled:
//!
//! ```text
//! band        colour
//! strong      bold green
//! gained      green
//! minor loss  yellow
//! loss        red
//! ```

use std::fmt::Write;

use console::style;
use serde::Serialize;
use strokes_gained::display::{format_strokes_gained, PerformanceBand};
use strokes_gained::{ShotResult, StrokesGainedSummary};

use crate::error::CliError;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Right-aligned strokes-gained value, styled by band.
pub fn styled_gain(value: f64, width: usize) -> String {
    let text = format!("{:>width$}", format_strokes_gained(value), width = width);
    match PerformanceBand::classify(value) {
        PerformanceBand::Strong => style(text).green().bold().to_string(),
        PerformanceBand::Gained => style(text).green().to_string(),
        PerformanceBand::MinorLoss => style(text).yellow().to_string(),
        PerformanceBand::Loss => style(text).red().to_string(),
    }
}

fn shot_row(shot: &ShotResult) -> String {
    let record = &shot.record;
    let mut club = record.club.clone().unwrap_or_default();
    if record.penalty_strokes > 0 {
        club.push_str(&format!(" (+{})", record.penalty_strokes));
    }
    format!(
        "{:>3}  {:<12} {:<8} {:>7.1}  {:<8} {:>7.1}  {:>7.2} {:>7.2}  {}  {}",
        record.shot_number,
        club,
        record.start_lie.as_str(),
        record.start_distance_yards,
        record.end_lie.as_str(),
        record.end_distance_yards,
        shot.expected_before,
        shot.expected_after,
        styled_gain(shot.strokes_gained, 6),
        shot.category.display_name(),
    )
}

/// Render a summary as a shot table followed by category totals.
pub fn summary_table(summary: &StrokesGainedSummary) -> String {
    let mut out = String::new();

    if summary.is_empty() {
        out.push_str("No shots recorded.\n");
    } else {
        let _ = writeln!(
            out,
            "{}",
            style(format!(
                "{:>3}  {:<12} {:<8} {:>7}  {:<8} {:>7}  {:>7} {:>7}  {:>6}  {}",
                "#", "Club", "From", "Yards", "To", "Yards", "Before", "After", "SG", "Category"
            ))
            .bold()
        );
        for shot in &summary.shots {
            let _ = writeln!(out, "{}", shot_row(shot));
        }
        out.push('\n');
    }

    for (category, value) in summary.by_category.iter() {
        let _ = writeln!(
            out,
            "{:<14} {}",
            category.display_name(),
            styled_gain(value, 6)
        );
    }
    let _ = writeln!(
        out,
        "{} {}  ({} strokes)",
        style(format!("{:<14}", "Total")).bold(),
        styled_gain(summary.total, 6),
        summary.strokes_taken()
    );

    out
}
