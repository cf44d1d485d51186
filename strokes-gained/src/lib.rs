//! Strokes Gained - shot-level performance scoring for golf
//!
//! This library scores individual golf shots against tour-average
//! expectation and provides the geometric calibration needed to turn
//! on-screen coordinates into real-world distances.
//!
//! # Evaluation Flow
//!
//! ```text
//! tee + pin + yardage ──► Calibration ──► distance_to_pin(point)
//!                                                 │
//!                                                 ▼
//!                               ShotRecord (distances + lies)
//!                                                 │
//!                                                 ▼
//!        baseline tables ──► score_shot ──► ShotResult ──► summarize
//!                                                              │
//!                                                              ▼
//!                                               StrokesGainedSummary
//! ```
//!
//! The scoring engine has no dependency on calibration internals: any caller
//! able to produce distances to the hole can build [`ShotRecord`]s directly.
//!
//! # Example
//!
//! ```
//! use strokes_gained::{summarize, LieType, Point, ShotRecord};
//!
//! let shots = vec![
//!     ShotRecord::new(1, LieType::Tee, 400.0, LieType::Fairway, 120.0),
//!     ShotRecord::new(2, LieType::Fairway, 120.0, LieType::Green, 4.0),
//!     ShotRecord::new(3, LieType::Green, 4.0, LieType::Green, 0.0),
//! ];
//!
//! let summary = summarize(&shots).unwrap();
//! assert_eq!(summary.shots.len(), 3);
//! ```

pub mod baseline;
pub mod calibration;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod plotter;
pub mod scoring;
pub mod shot;
pub mod summary;

pub use baseline::{
    expected_strokes, expected_strokes_putting, expected_strokes_through_green, lie_adjustment,
};
pub use calibration::{distance_to_target, scale, Calibration, CalibrationError, Point};
pub use error::ScoringError;
pub use scoring::{categorize, score_shot, Scorer, ScoringConfig};
pub use shot::{LieType, ShotCategory, ShotRecord, ShotResult};
pub use summary::{summarize, summarize_many, CategoryTotals, StrokesGainedSummary};

/// Library version, as published in the crate manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
