//! Scoring thresholds.

/// Default distance under which a shot counts as holed (yards).
///
/// A tolerance for imprecise position capture, not a claim about where the
/// ball physically is.
pub const DEFAULT_HOLED_THRESHOLD_YARDS: f64 = 0.5;

/// Default radius of the around-green category (yards, inclusive).
pub const DEFAULT_AROUND_GREEN_YARDS: f64 = 50.0;

/// Thresholds used when scoring and categorizing shots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    /// Shots ending closer than this to the hole are treated as holed.
    pub holed_threshold_yards: f64,

    /// Non-green, non-tee shots starting at or inside this distance are
    /// `around_green`.
    pub around_green_yards: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            holed_threshold_yards: DEFAULT_HOLED_THRESHOLD_YARDS,
            around_green_yards: DEFAULT_AROUND_GREEN_YARDS,
        }
    }
}

impl ScoringConfig {
    /// Set the holed-out threshold.
    pub fn with_holed_threshold(mut self, yards: f64) -> Self {
        self.holed_threshold_yards = yards;
        self
    }

    /// Set the around-green radius.
    pub fn with_around_green(mut self, yards: f64) -> Self {
        self.around_green_yards = yards;
        self
    }
}
