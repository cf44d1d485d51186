//! Core types for distance calibration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during calibration or distance conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalibrationError {
    /// Tee and pin are the same point, so no scale can be derived.
    #[error("Degenerate calibration: tee and pin coincide at {0}")]
    CoincidentPoints(Point),

    /// The known hole length is zero, negative or not finite.
    #[error("Degenerate calibration: hole yardage must be positive, got {0}")]
    NonPositiveYardage(f64),

    /// A scale that did not come from a successful calibration.
    #[error("Invalid scale: pixels per yard must be positive, got {0}")]
    InvalidScale(f64),
}

impl CalibrationError {
    /// Whether this error means the reference points cannot be calibrated.
    ///
    /// Callers should ask for new reference points rather than fall back
    /// to any default scale.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            CalibrationError::CoincidentPoints(_) | CalibrationError::NonPositiveYardage(_)
        )
    }
}

/// A position in an arbitrary planar space (pixels, percent of an image, ...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point, in planar units.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `"x,y"` (whitespace around either number is ignored).
impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected 'x,y', got '{}'", s))?;
        let x: f64 = x
            .trim()
            .parse()
            .map_err(|_| format!("invalid x coordinate '{}'", x.trim()))?;
        let y: f64 = y
            .trim()
            .parse()
            .map_err(|_| format!("invalid y coordinate '{}'", y.trim()))?;
        Ok(Point::new(x, y))
    }
}
