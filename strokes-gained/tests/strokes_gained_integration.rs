//! Integration tests for the strokes-gained engine.
//!
//! These tests exercise the public API end to end:
//! - Calibration → plotted shots → summary
//! - Published baseline values
//! - JSON wire format of records and summaries
//!
//! Run with: `cargo test --test strokes_gained_integration`

use strokes_gained::display::{format_strokes_gained, PerformanceBand};
use strokes_gained::plotter::{HolePlot, PlottedShot, ShotPlotter};
use strokes_gained::{
    distance_to_target, expected_strokes, expected_strokes_putting,
    expected_strokes_through_green, scale, summarize, Calibration, LieType, Point, Scorer,
    ScoringConfig, ShotCategory, ShotRecord, StrokesGainedSummary,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Assert two values agree to within a small tolerance.
fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// A 400-yard hole laid out horizontally at one pixel per yard.
fn flat_hole() -> Calibration {
    Calibration::new(Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400.0).unwrap()
}

/// A bogey five: drive, approach into a bunker, splash out, two putts.
fn bogey_round() -> Vec<ShotRecord> {
    vec![
        ShotRecord::new(1, LieType::Tee, 400.0, LieType::Fairway, 140.0),
        ShotRecord::new(2, LieType::Fairway, 140.0, LieType::Bunker, 15.0),
        ShotRecord::new(3, LieType::Bunker, 15.0, LieType::Green, 8.0),
        ShotRecord::new(4, LieType::Green, 8.0, LieType::Green, 1.0),
        ShotRecord::new(5, LieType::Green, 1.0, LieType::Green, 0.0),
    ]
}

// ============================================================================
// Baseline Values
// ============================================================================

#[test]
fn test_published_baseline_values() {
    assert_close(expected_strokes_through_green(100.0), 2.26);
    assert_close(expected_strokes_through_green(400.0), 4.07);
    assert_close(expected_strokes_putting(10.0), 1.37);
}

#[test]
fn test_lie_ordering_at_common_distances() {
    for distance in [20.0, 75.0, 150.0, 260.0, 410.0] {
        let tee = expected_strokes(distance, LieType::Tee).unwrap();
        let fairway = expected_strokes(distance, LieType::Fairway).unwrap();
        let bunker = expected_strokes(distance, LieType::Bunker).unwrap();
        assert!(bunker > fairway, "bunker not harder at {} yards", distance);
        assert!(fairway > tee, "fairway not harder at {} yards", distance);
    }
}

// ============================================================================
// Calibration → Plotting → Summary
// ============================================================================

#[test]
fn test_calibration_round_trip() {
    let ppy = scale(Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400.0).unwrap();
    assert_close(ppy, 1.0);
    assert_close(
        distance_to_target(Point::new(100.0, 0.0), Point::new(400.0, 0.0), ppy).unwrap(),
        300.0,
    );
}

#[test]
fn test_plotted_hole_end_to_end() {
    let mut plotter = ShotPlotter::new(flat_hole());

    plotter.plot(
        PlottedShot::new(Point::new(0.0, 0.0), Point::new(260.0, 0.0), LieType::Tee)
            .with_club("Driver"),
    );
    let start = plotter.next_start().unwrap();
    let lie = plotter.next_lie();
    assert_eq!(lie, LieType::Fairway);

    // 3 yards out is inferred as fairway; record it on the green explicitly
    plotter.plot(
        PlottedShot::new(start, Point::new(397.0, 0.0), lie).with_end_lie(LieType::Green),
    );
    let start = plotter.next_start().unwrap();
    let lie = plotter.next_lie();
    assert_eq!(lie, LieType::Green);

    plotter.plot(PlottedShot::new(start, Point::new(400.2, 0.0), lie));

    let summary = plotter.summarize(&Scorer::with_defaults()).unwrap();
    assert_eq!(summary.shots.len(), 3);
    assert_eq!(summary.strokes_taken(), 3);

    let categories: Vec<ShotCategory> = summary.shots.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![ShotCategory::Tee, ShotCategory::Approach, ShotCategory::Putting]
    );

    // final putt finishes inside the holed tolerance
    assert_eq!(summary.shots[2].expected_after, 0.0);

    // a holed-out hole telescopes to expected-from-tee minus strokes taken
    let from_tee = expected_strokes(400.0, LieType::Tee).unwrap();
    assert!((summary.total - (from_tee - 3.0)).abs() < 1e-9);
}

#[test]
fn test_bogey_round_loses_strokes() {
    let summary = summarize(&bogey_round()).unwrap();

    assert!(summary.total < 0.0);
    assert_eq!(PerformanceBand::classify(summary.total), PerformanceBand::Loss);
    assert!(format_strokes_gained(summary.total).starts_with('-'));

    let bucket_sum: f64 = summary.by_category.iter().map(|(_, v)| v).sum();
    assert!((summary.total - bucket_sum).abs() < 1e-9);
}

#[test]
fn test_custom_thresholds_change_categories() {
    let shots = vec![ShotRecord::new(1, LieType::Rough, 45.0, LieType::Green, 2.0)];

    let standard = summarize(&shots).unwrap();
    assert_eq!(standard.shots[0].category, ShotCategory::AroundGreen);

    let tight = Scorer::new(ScoringConfig::default().with_around_green(30.0));
    let summary = tight.summarize(&shots).unwrap();
    assert_eq!(summary.shots[0].category, ShotCategory::Approach);
}

#[test]
fn test_invalid_shot_fails_whole_round() {
    let mut shots = bogey_round();
    shots[4].start_distance_yards = -2.0;
    assert!(summarize(&shots).is_err());
}

// ============================================================================
// Wire Format
// ============================================================================

#[test]
fn test_hole_plot_json_to_summary() {
    let json = r#"{
        "teePosition": {"x": 0, "y": 0},
        "pinPosition": {"x": 800, "y": 0},
        "holeYardage": 400,
        "shots": [
            {"start": {"x": 0, "y": 0}, "end": {"x": 500, "y": 0}, "startLie": "tee"},
            {"start": {"x": 500, "y": 0}, "end": {"x": 800, "y": 0}, "startLie": "fairway"}
        ]
    }"#;

    let hole: HolePlot = serde_json::from_str(json).unwrap();
    let records = hole.shot_records().unwrap();
    assert_close(records[0].end_distance_yards, 150.0);
    assert_eq!(records[1].end_lie, LieType::Green);

    let summary = summarize(&records).unwrap();
    assert_eq!(summary.shots[1].expected_after, 0.0);
}

#[test]
fn test_summary_json_is_rounded_and_readable() {
    let summary = summarize(&bogey_round()).unwrap();
    let json = serde_json::to_string(&summary).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for shot in value["shots"].as_array().unwrap() {
        let gained = shot["strokesGained"].as_f64().unwrap();
        assert_close(gained, (gained * 100.0).round() / 100.0);
        assert!(shot["shotNumber"].is_u64());
        assert!(shot["startLie"].is_string());
    }

    let reread: StrokesGainedSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(reread.shots.len(), summary.shots.len());
    assert_eq!(reread.shots[0].record, summary.shots[0].record);
    assert!((reread.total - summary.total).abs() <= 0.005 + 1e-9);
}

#[test]
fn test_records_accept_minimal_json() {
    let json = r#"[
        {"shotNumber": 1, "startPosition": {"x": 0, "y": 0}, "endPosition": {"x": 0, "y": 0},
         "startLie": "tee", "endLie": "fairway", "startDistanceYards": 380, "endDistanceYards": 120},
        {"shotNumber": 2, "startPosition": {"x": 0, "y": 0}, "endPosition": {"x": 0, "y": 0},
         "startLie": "fairway", "endLie": "green", "startDistanceYards": 120, "endDistanceYards": 0.2,
         "isPenalty": false, "penaltyStrokes": 0, "club": "PW"}
    ]"#;

    let shots: Vec<ShotRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(shots[0].club, None);
    assert_eq!(shots[1].club.as_deref(), Some("PW"));

    let summary = summarize(&shots).unwrap();
    assert_eq!(summary.shots[1].expected_after, 0.0);
}
