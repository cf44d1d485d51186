//! Per-shot strokes-gained scoring.
//!
//! # Formula
//!
//! ```text
//! strokes_gained = expected_before - expected_after - (1 + penalty_strokes)
//! ```
//!
//! `expected_after` is zero when the shot ends within the holed-out
//! threshold, whatever the recorded end lie.
//!
//! # Categories
//!
//! Evaluated in order against the *start* of the shot:
//!
//! | Condition | Category |
//! |-----------|----------|
//! | lie is `green` | `putting` |
//! | lie is `tee` | `tee` |
//! | distance ≤ 50 yards | `around_green` |
//! | otherwise | `approach` |
//!
//! A tee shot on a very short hole therefore stays in `tee`.

mod config;

pub use config::{ScoringConfig, DEFAULT_AROUND_GREEN_YARDS, DEFAULT_HOLED_THRESHOLD_YARDS};

use tracing::trace;

use crate::baseline::expected_strokes;
use crate::error::ScoringError;
use crate::shot::{LieType, ShotCategory, ShotRecord, ShotResult};

/// Scores shots with a fixed set of thresholds.
///
/// Stateless apart from its configuration; a single scorer can be shared
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Create a scorer with the given thresholds.
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Create a scorer with the standard thresholds.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Thresholds in use.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Category of a shot starting `distance_yards` from the hole in `lie`.
    pub fn categorize(&self, distance_yards: f64, lie: LieType) -> ShotCategory {
        match lie {
            LieType::Green => ShotCategory::Putting,
            LieType::Tee => ShotCategory::Tee,
            _ if distance_yards <= self.config.around_green_yards => ShotCategory::AroundGreen,
            _ => ShotCategory::Approach,
        }
    }

    /// Whether a shot ending `end_distance_yards` from the hole counts as holed.
    pub fn is_holed(&self, end_distance_yards: f64) -> bool {
        end_distance_yards < self.config.holed_threshold_yards
    }

    /// Check that both distances of a shot can be evaluated.
    pub fn validate(&self, shot: &ShotRecord) -> Result<(), ScoringError> {
        for distance in [shot.start_distance_yards, shot.end_distance_yards] {
            if !(distance.is_finite() && distance >= 0.0) {
                return Err(ScoringError::invalid_distance(distance).for_shot(shot.shot_number));
            }
        }
        Ok(())
    }

    /// Score a single shot.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidDistance`] when either distance is
    /// negative or not finite.
    pub fn score_shot(&self, shot: &ShotRecord) -> Result<ShotResult, ScoringError> {
        self.validate(shot)?;

        let expected_before = expected_strokes(shot.start_distance_yards, shot.start_lie)
            .map_err(|e| e.for_shot(shot.shot_number))?;

        let holed = self.is_holed(shot.end_distance_yards);
        let expected_after = if holed {
            0.0
        } else {
            expected_strokes(shot.end_distance_yards, shot.end_lie)
                .map_err(|e| e.for_shot(shot.shot_number))?
        };

        let strokes_taken = 1.0 + f64::from(shot.penalty_strokes);
        let strokes_gained = expected_before - expected_after - strokes_taken;
        let category = self.categorize(shot.start_distance_yards, shot.start_lie);

        trace!(
            shot = shot.shot_number,
            category = %category,
            expected_before,
            expected_after,
            strokes_gained,
            holed,
            "Scored shot"
        );

        Ok(ShotResult {
            record: shot.clone(),
            expected_before,
            expected_after,
            strokes_gained,
            category,
        })
    }
}

/// Score a single shot with the standard thresholds.
pub fn score_shot(shot: &ShotRecord) -> Result<ShotResult, ScoringError> {
    Scorer::with_defaults().score_shot(shot)
}

/// Categorize a shot with the standard thresholds.
pub fn categorize(distance_yards: f64, lie: LieType) -> ShotCategory {
    Scorer::with_defaults().categorize(distance_yards, lie)
}
