//! Shot input records and scored results.

use serde::{Deserialize, Serialize};

use super::types::{LieType, ShotCategory};
use crate::calibration::Point;
use crate::display::serialize_rounded;

/// One physical stroke as captured by the caller.
///
/// Distances are already expressed in yards to the hole. Positions are kept
/// for round-tripping and display only; scoring never reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    /// 1-based position of the shot within the hole.
    pub shot_number: u32,

    /// Where the shot was played from.
    pub start_position: Point,

    /// Where the ball came to rest.
    pub end_position: Point,

    /// Lie before the shot.
    pub start_lie: LieType,

    /// Lie after the shot.
    pub end_lie: LieType,

    /// Distance from the start position to the hole (yards).
    pub start_distance_yards: f64,

    /// Distance from the end position to the hole (yards).
    ///
    /// Normally no greater than `start_distance_yards`, but a shot that
    /// moves the ball away from the hole is scored as recorded.
    pub end_distance_yards: f64,

    /// Free-form club label. Descriptive only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<String>,

    /// Whether the shot incurred a penalty.
    #[serde(default)]
    pub is_penalty: bool,

    /// Penalty strokes added on top of the stroke itself.
    #[serde(default)]
    pub penalty_strokes: u32,
}

impl ShotRecord {
    /// Create a shot from distances and lies, with positions at the origin.
    pub fn new(
        shot_number: u32,
        start_lie: LieType,
        start_distance_yards: f64,
        end_lie: LieType,
        end_distance_yards: f64,
    ) -> Self {
        Self {
            shot_number,
            start_position: Point::ORIGIN,
            end_position: Point::ORIGIN,
            start_lie,
            end_lie,
            start_distance_yards,
            end_distance_yards,
            club: None,
            is_penalty: false,
            penalty_strokes: 0,
        }
    }

    /// Set the start and end positions.
    pub fn with_positions(mut self, start: Point, end: Point) -> Self {
        self.start_position = start;
        self.end_position = end;
        self
    }

    /// Set the club label.
    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    /// Add penalty strokes. Marks the shot as a penalty when non-zero.
    pub fn with_penalty(mut self, strokes: u32) -> Self {
        self.penalty_strokes = strokes;
        self.is_penalty = strokes > 0;
        self
    }

    /// Strokes charged for this record: the stroke itself plus penalties.
    pub fn strokes_taken(&self) -> u64 {
        1 + u64::from(self.penalty_strokes)
    }
}

/// A [`ShotRecord`] together with its strokes-gained evaluation.
///
/// Values are kept at full precision. They are rounded to two decimals
/// when serialized or formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotResult {
    /// The scored shot.
    #[serde(flatten)]
    pub record: ShotRecord,

    /// Expected strokes to finish from the start of the shot.
    #[serde(serialize_with = "serialize_rounded")]
    pub expected_before: f64,

    /// Expected strokes to finish from the end of the shot (0 when holed).
    #[serde(serialize_with = "serialize_rounded")]
    pub expected_after: f64,

    /// `expected_before - expected_after - strokes_taken`.
    #[serde(serialize_with = "serialize_rounded")]
    pub strokes_gained: f64,

    /// Category derived from the start of the shot.
    pub category: ShotCategory,
}
