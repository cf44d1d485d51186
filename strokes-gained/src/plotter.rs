//! Building shot records from plotted positions.
//!
//! A [`ShotPlotter`] turns start/end points on a calibrated hole image into
//! [`ShotRecord`]s: distances come from the calibration, shots are numbered
//! in the order they are plotted, and a missing end lie is inferred from how
//! close the ball finished to the pin.
//!
//! Two radii are used:
//!
//! ```text
//! end lie of a shot      green when < 1 yard   (else fairway)
//! start lie of the next  green when < 5 yards  (else fairway)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calibration::{Calibration, CalibrationError, Point};
use crate::error::ScoringError;
use crate::scoring::Scorer;
use crate::shot::{LieType, ShotRecord};
use crate::summary::StrokesGainedSummary;

/// Distance inside which the next shot is suggested to start on the green (yards).
pub const GREEN_INFERENCE_YARDS: f64 = 5.0;

/// Distance inside which a shot without an explicit end lie finished on the green (yards).
pub const END_ON_GREEN_YARDS: f64 = 1.0;

/// Lie to suggest for a shot played from `distance_yards`.
pub fn suggested_lie(distance_yards: f64) -> LieType {
    if distance_yards < GREEN_INFERENCE_YARDS {
        LieType::Green
    } else {
        LieType::Fairway
    }
}

/// Lie recorded for a shot that finished `distance_yards` from the pin
/// when none was given.
pub fn inferred_end_lie(distance_yards: f64) -> LieType {
    if distance_yards < END_ON_GREEN_YARDS {
        LieType::Green
    } else {
        LieType::Fairway
    }
}

/// A shot as plotted on a hole image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlottedShot {
    /// Where the shot was played from.
    pub start: Point,

    /// Where the ball finished.
    pub end: Point,

    /// Lie before the shot.
    pub start_lie: LieType,

    /// Lie after the shot; inferred with [`inferred_end_lie`] when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_lie: Option<LieType>,

    /// Club label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,

    /// Penalty strokes incurred.
    #[serde(default)]
    pub penalty_strokes: u32,
}

impl PlottedShot {
    /// Create a plotted shot with an inferred end lie and no penalty.
    pub fn new(start: Point, end: Point, start_lie: LieType) -> Self {
        Self {
            start,
            end,
            start_lie,
            end_lie: None,
            club: None,
            penalty_strokes: 0,
        }
    }

    /// Set the end lie explicitly.
    pub fn with_end_lie(mut self, lie: LieType) -> Self {
        self.end_lie = Some(lie);
        self
    }

    /// Set the club label.
    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    /// Add penalty strokes.
    pub fn with_penalty(mut self, strokes: u32) -> Self {
        self.penalty_strokes = strokes;
        self
    }
}

/// Accumulates shots plotted on one calibrated hole.
#[derive(Debug, Clone)]
pub struct ShotPlotter {
    calibration: Calibration,
    shots: Vec<ShotRecord>,
}

impl ShotPlotter {
    /// Create a plotter for a calibrated hole.
    pub fn new(calibration: Calibration) -> Self {
        Self {
            calibration,
            shots: Vec::new(),
        }
    }

    /// The calibration distances are measured with.
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Record a plotted shot and return the resulting record.
    pub fn plot(&mut self, shot: PlottedShot) -> &ShotRecord {
        let start_distance = self.calibration.distance_to_pin(shot.start);
        let end_distance = self.calibration.distance_to_pin(shot.end);
        let end_lie = shot.end_lie.unwrap_or_else(|| inferred_end_lie(end_distance));

        let mut record = ShotRecord::new(
            self.shots.len() as u32 + 1,
            shot.start_lie,
            start_distance,
            end_lie,
            end_distance,
        )
        .with_positions(shot.start, shot.end)
        .with_penalty(shot.penalty_strokes);
        record.club = shot.club;

        debug!(
            shot = record.shot_number,
            start_distance_yards = start_distance,
            end_distance_yards = end_distance,
            end_lie = %end_lie,
            "Plotted shot"
        );

        self.shots.push(record);
        &self.shots[self.shots.len() - 1]
    }

    /// Where the next shot starts: the end of the last plotted shot.
    pub fn next_start(&self) -> Option<Point> {
        self.shots.last().map(|s| s.end_position)
    }

    /// Suggested lie for the next shot, based on where the last one finished.
    pub fn next_lie(&self) -> LieType {
        self.shots
            .last()
            .map(|s| suggested_lie(s.end_distance_yards))
            .unwrap_or(LieType::Tee)
    }

    /// Shots plotted so far, in order.
    pub fn shots(&self) -> &[ShotRecord] {
        &self.shots
    }

    /// Remove the most recently plotted shot.
    pub fn undo(&mut self) -> Option<ShotRecord> {
        self.shots.pop()
    }

    /// Discard every plotted shot, keeping the calibration.
    pub fn clear(&mut self) {
        self.shots.clear();
    }

    /// Score the plotted shots.
    pub fn summarize(&self, scorer: &Scorer) -> Result<StrokesGainedSummary, ScoringError> {
        scorer.summarize(&self.shots)
    }

    /// Consume the plotter, returning the plotted shots.
    pub fn into_shots(self) -> Vec<ShotRecord> {
        self.shots
    }
}

/// A whole hole described by its reference points and plotted shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolePlot {
    pub tee_position: Point,
    pub pin_position: Point,
    pub hole_yardage: f64,
    #[serde(default)]
    pub shots: Vec<PlottedShot>,
}

impl HolePlot {
    /// Calibrate the hole and convert every plotted shot to a record.
    pub fn shot_records(&self) -> Result<Vec<ShotRecord>, CalibrationError> {
        let calibration =
            Calibration::new(self.tee_position, self.pin_position, self.hole_yardage)?;
        let mut plotter = ShotPlotter::new(calibration);
        for shot in &self.shots {
            plotter.plot(shot.clone());
        }
        Ok(plotter.into_shots())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 400-yard hole drawn straight down an image at 2 pixels per yard.
    fn straight_hole() -> Calibration {
        Calibration::new(Point::new(100.0, 900.0), Point::new(100.0, 100.0), 400.0).unwrap()
    }

    /// A shot along the hole's centre line, from `start_y` to `end_y`.
    fn along(start_y: f64, end_y: f64, lie: LieType) -> PlottedShot {
        PlottedShot::new(Point::new(100.0, start_y), Point::new(100.0, end_y), lie)
    }

    #[test]
    fn test_suggested_lie() {
        assert_eq!(suggested_lie(0.0), LieType::Green);
        assert_eq!(suggested_lie(4.9), LieType::Green);
        assert_eq!(suggested_lie(5.0), LieType::Fairway);
    }

    #[test]
    fn test_inferred_end_lie() {
        assert_eq!(inferred_end_lie(0.0), LieType::Green);
        assert_eq!(inferred_end_lie(0.99), LieType::Green);
        assert_eq!(inferred_end_lie(1.0), LieType::Fairway);
        assert_eq!(inferred_end_lie(3.0), LieType::Fairway);
    }

    #[test]
    fn test_plot_measures_and_numbers_shots() {
        let mut plotter = ShotPlotter::new(straight_hole());
        assert_eq!(plotter.next_lie(), LieType::Tee);
        assert_eq!(plotter.next_start(), None);

        let first = plotter
            .plot(along(900.0, 400.0, LieType::Tee).with_club("Driver"))
            .clone();
        assert_eq!(first.shot_number, 1);
        assert_eq!(first.start_distance_yards, 400.0);
        assert_eq!(first.end_distance_yards, 150.0);
        assert_eq!(first.end_lie, LieType::Fairway);
        assert_eq!(first.club.as_deref(), Some("Driver"));

        assert_eq!(plotter.next_start(), Some(Point::new(100.0, 400.0)));

        // 3 yards out: recorded as fairway, but the next shot is suggested from the green
        let second = plotter.plot(along(400.0, 106.0, LieType::Fairway)).clone();
        assert_eq!(second.shot_number, 2);
        assert_eq!(second.end_distance_yards, 3.0);
        assert_eq!(second.end_lie, LieType::Fairway);
        assert_eq!(plotter.next_lie(), LieType::Green);

        let third = plotter.plot(along(106.0, 101.0, LieType::Green)).clone();
        assert_eq!(third.end_distance_yards, 0.5);
        assert_eq!(third.end_lie, LieType::Green);
    }

    #[test]
    fn test_explicit_end_lie_and_penalty() {
        let mut plotter = ShotPlotter::new(straight_hole());
        let record = plotter
            .plot(
                PlottedShot::new(Point::new(100.0, 900.0), Point::new(300.0, 500.0), LieType::Tee)
                    .with_end_lie(LieType::Recovery)
                    .with_penalty(1),
            )
            .clone();
        assert_eq!(record.end_lie, LieType::Recovery);
        assert!(record.is_penalty);
        assert_eq!(record.penalty_strokes, 1);
    }

    #[test]
    fn test_undo_and_clear() {
        let mut plotter = ShotPlotter::new(straight_hole());
        plotter.plot(along(900.0, 400.0, LieType::Tee));
        plotter.plot(along(400.0, 110.0, LieType::Fairway));

        let undone = plotter.undo().unwrap();
        assert_eq!(undone.shot_number, 2);
        assert_eq!(plotter.shots().len(), 1);

        // renumbering continues from the remaining shots
        let replot = plotter.plot(along(400.0, 120.0, LieType::Fairway)).clone();
        assert_eq!(replot.shot_number, 2);

        plotter.clear();
        assert!(plotter.shots().is_empty());
        assert_eq!(plotter.calibration().hole_yardage(), 400.0);
    }

    #[test]
    fn test_plotted_hole_summarizes() {
        let mut plotter = ShotPlotter::new(straight_hole());
        plotter.plot(along(900.0, 400.0, LieType::Tee));
        plotter.plot(along(400.0, 104.0, LieType::Fairway));
        plotter.plot(along(104.0, 100.0, LieType::Green));

        let summary = plotter.summarize(&Scorer::with_defaults()).unwrap();
        assert_eq!(summary.shots.len(), 3);
        // last shot finishes on the pin and is holed
        assert_eq!(summary.shots[2].expected_after, 0.0);
    }

    #[test]
    fn test_hole_plot_requires_valid_calibration() {
        let hole = HolePlot {
            tee_position: Point::new(10.0, 10.0),
            pin_position: Point::new(10.0, 10.0),
            hole_yardage: 350.0,
            shots: vec![],
        };
        let err = hole.shot_records().unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_hole_plot_from_json() {
        let json = r#"{
            "teePosition": {"x": 100.0, "y": 900.0},
            "pinPosition": {"x": 100.0, "y": 100.0},
            "holeYardage": 400,
            "shots": [
                {"start": {"x": 100.0, "y": 900.0}, "end": {"x": 100.0, "y": 400.0}, "startLie": "tee", "club": "Driver"},
                {"start": {"x": 100.0, "y": 400.0}, "end": {"x": 100.0, "y": 100.0}, "startLie": "fairway", "endLie": "green"}
            ]
        }"#;

        let hole: HolePlot = serde_json::from_str(json).unwrap();
        let records = hole.shot_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].end_distance_yards, 150.0);
        assert_eq!(records[1].end_distance_yards, 0.0);
        assert_eq!(records[1].end_lie, LieType::Green);
    }
}
