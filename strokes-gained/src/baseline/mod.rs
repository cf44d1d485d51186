//! Expected-strokes baselines.
//!
//! Two sparse tables back every evaluation:
//!
//! | Table | Unit | Used for |
//! |-------|------|----------|
//! | [`THROUGH_THE_GREEN`] | yards | every lie except `green`, plus a lie offset |
//! | [`PUTTING`] | feet | `green` |
//!
//! Lookups interpolate linearly between samples, clamp below the first
//! sample and extrapolate beyond the last one (see [`BaselineTable::value_at`]).

mod data;
mod table;

pub use data::{lie_adjustment, PUTTING, THROUGH_THE_GREEN};
pub use table::{BaselineTable, DistanceUnit};

use tracing::warn;

use crate::error::ScoringError;
use crate::shot::LieType;

/// Feet per yard, for converting green distances to the putting table.
pub const FEET_PER_YARD: f64 = 3.0;

/// Expected strokes from the fairway at `distance_yards`.
pub fn expected_strokes_through_green(distance_yards: f64) -> f64 {
    THROUGH_THE_GREEN.value_at(distance_yards)
}

/// Expected strokes on the green at `distance_feet`.
pub fn expected_strokes_putting(distance_feet: f64) -> f64 {
    PUTTING.value_at(distance_feet)
}

/// Expected strokes to hole out from `distance_yards` in the given lie.
///
/// `green` converts to feet and uses the putting table; every other lie uses
/// the through-the-green table plus [`lie_adjustment`].
///
/// # Errors
///
/// Returns [`ScoringError::InvalidDistance`] for negative or non-finite
/// distances.
pub fn expected_strokes(distance_yards: f64, lie: LieType) -> Result<f64, ScoringError> {
    if !(distance_yards.is_finite() && distance_yards >= 0.0) {
        warn!(distance_yards, lie = %lie, "Rejecting invalid distance");
        return Err(ScoringError::invalid_distance(distance_yards));
    }

    let expected = match lie {
        LieType::Green => expected_strokes_putting(distance_yards * FEET_PER_YARD),
        other => expected_strokes_through_green(distance_yards) + lie_adjustment(other),
    };
    Ok(expected)
}
