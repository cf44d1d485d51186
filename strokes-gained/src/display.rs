//! Presentation helpers.
//!
//! Scoring keeps full precision; these helpers apply the two-decimal
//! rounding used in reports and on the wire.

use std::fmt;

use serde::Serializer;

/// Round to two decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `serde` helper serializing an `f64` rounded to two decimals.
pub fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round2(*value))
}

/// Format a strokes-gained value with two decimals and an explicit `+` for gains.
///
/// ```
/// use strokes_gained::display::format_strokes_gained;
///
/// assert_eq!(format_strokes_gained(0.254), "+0.25");
/// assert_eq!(format_strokes_gained(-1.3), "-1.30");
/// assert_eq!(format_strokes_gained(0.0), "0.00");
/// ```
pub fn format_strokes_gained(value: f64) -> String {
    let rounded = round2(value);
    if rounded > 0.0 {
        format!("+{:.2}", rounded)
    } else if rounded == 0.0 {
        // avoid "-0.00"
        "0.00".to_string()
    } else {
        format!("{:.2}", rounded)
    }
}

/// Qualitative band for a strokes-gained value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceBand {
    /// More than half a stroke gained.
    Strong,
    /// Some strokes gained.
    Gained,
    /// Lost less than half a stroke.
    MinorLoss,
    /// Lost half a stroke or more.
    Loss,
}

impl PerformanceBand {
    /// Classify a strokes-gained value.
    pub fn classify(value: f64) -> Self {
        if value > 0.5 {
            PerformanceBand::Strong
        } else if value > 0.0 {
            PerformanceBand::Gained
        } else if value > -0.5 {
            PerformanceBand::MinorLoss
        } else {
            PerformanceBand::Loss
        }
    }

    /// Whether the value behind this band beat the baseline.
    pub fn is_gain(&self) -> bool {
        matches!(self, PerformanceBand::Strong | PerformanceBand::Gained)
    }
}

impl fmt::Display for PerformanceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceBand::Strong => write!(f, "strong"),
            PerformanceBand::Gained => write!(f, "gained"),
            PerformanceBand::MinorLoss => write!(f, "minor loss"),
            PerformanceBand::Loss => write!(f, "loss"),
        }
    }
}
