//! Distance calibration.
//!
//! Converts on-screen coordinates into real-world yards. A hole image is
//! calibrated from two reference points with a known separation (the tee and
//! the pin, `hole_yardage` apart); every other point is then measured against
//! the pin using the derived scale.
//!
//! ```text
//!   tee ●───────────── pixel distance ─────────────● pin
//!        pixels_per_yard = pixel distance / hole_yardage
//!
//!   ball ●──── d pixels ────● pin   →   d / pixels_per_yard yards
//! ```

mod types;

pub use types::{CalibrationError, Point};

use serde::Serialize;
use tracing::debug;

/// Derive the scale (planar units per yard) from two reference points.
///
/// # Errors
///
/// Returns [`CalibrationError::CoincidentPoints`] when the points are equal,
/// whatever the yardage, and [`CalibrationError::NonPositiveYardage`] when
/// `hole_yardage` is not a positive finite number.
pub fn scale(tee: Point, pin: Point, hole_yardage: f64) -> Result<f64, CalibrationError> {
    let pixel_distance = tee.distance_to(&pin);
    if pixel_distance == 0.0 {
        return Err(CalibrationError::CoincidentPoints(tee));
    }
    if !(hole_yardage.is_finite() && hole_yardage > 0.0) {
        return Err(CalibrationError::NonPositiveYardage(hole_yardage));
    }

    let pixels_per_yard = pixel_distance / hole_yardage;
    if !(pixels_per_yard.is_finite() && pixels_per_yard > 0.0) {
        return Err(CalibrationError::InvalidScale(pixels_per_yard));
    }
    Ok(pixels_per_yard)
}

/// Distance in yards from `point` to `target` at the given scale.
///
/// # Errors
///
/// Returns [`CalibrationError::InvalidScale`] when `pixels_per_yard` is not a
/// positive finite number.
pub fn distance_to_target(
    point: Point,
    target: Point,
    pixels_per_yard: f64,
) -> Result<f64, CalibrationError> {
    if !(pixels_per_yard.is_finite() && pixels_per_yard > 0.0) {
        return Err(CalibrationError::InvalidScale(pixels_per_yard));
    }
    Ok(point.distance_to(&target) / pixels_per_yard)
}

/// A validated calibration for one hole image.
///
/// Can only be constructed through [`Calibration::new`], so holding one
/// guarantees a usable scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    tee_position: Point,
    pin_position: Point,
    hole_yardage: f64,
    pixels_per_yard: f64,
}

impl Calibration {
    /// Calibrate from the tee and pin positions and the hole's length.
    pub fn new(tee: Point, pin: Point, hole_yardage: f64) -> Result<Self, CalibrationError> {
        let pixels_per_yard = scale(tee, pin, hole_yardage)?;
        debug!(
            tee = %tee,
            pin = %pin,
            hole_yardage,
            pixels_per_yard,
            "Calibrated hole image"
        );
        Ok(Self {
            tee_position: tee,
            pin_position: pin,
            hole_yardage,
            pixels_per_yard,
        })
    }

    /// Tee reference point.
    pub fn tee_position(&self) -> Point {
        self.tee_position
    }

    /// Pin reference point; distances are measured to here.
    pub fn pin_position(&self) -> Point {
        self.pin_position
    }

    /// Known tee-to-pin distance (yards).
    pub fn hole_yardage(&self) -> f64 {
        self.hole_yardage
    }

    /// Planar units per yard.
    pub fn pixels_per_yard(&self) -> f64 {
        self.pixels_per_yard
    }

    /// Yards from `point` to the pin.
    pub fn distance_to_pin(&self, point: Point) -> f64 {
        self.distance_between(point, self.pin_position)
    }

    /// Yards between two arbitrary points.
    pub fn distance_between(&self, a: Point, b: Point) -> f64 {
        a.distance_to(&b) / self.pixels_per_yard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_one_pixel_per_yard() {
        let ppy = scale(Point::new(0.0, 0.0), Point::new(400.0, 0.0), 400.0).unwrap();
        assert_eq!(ppy, 1.0);
    }

    #[test]
    fn test_distance_to_target_after_calibration() {
        let pin = Point::new(400.0, 0.0);
        let ppy = scale(Point::new(0.0, 0.0), pin, 400.0).unwrap();
        let yards = distance_to_target(Point::new(100.0, 0.0), pin, ppy).unwrap();
        assert_eq!(yards, 300.0);
    }

    #[test]
    fn test_scale_uses_euclidean_distance() {
        // 3-4-5 triangle scaled by 100
        let ppy = scale(Point::new(0.0, 0.0), Point::new(300.0, 400.0), 250.0).unwrap();
        assert!((ppy - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_points_are_degenerate() {
        let p = Point::new(12.0, 34.0);
        for yardage in [400.0, 0.0, -5.0, f64::NAN] {
            let err = scale(p, p, yardage).unwrap_err();
            assert!(
                matches!(err, CalibrationError::CoincidentPoints(_)),
                "yardage {} should report coincident points, got {:?}",
                yardage,
                err
            );
            assert!(err.is_degenerate());
        }
    }

    #[test]
    fn test_non_positive_yardage_is_degenerate() {
        for yardage in [0.0, -120.0, f64::INFINITY, f64::NAN] {
            let err = scale(Point::new(0.0, 0.0), Point::new(10.0, 0.0), yardage).unwrap_err();
            assert!(matches!(err, CalibrationError::NonPositiveYardage(_)));
        }
    }

    #[test]
    fn test_distance_rejects_invalid_scale() {
        for ppy in [0.0, -1.0, f64::NAN] {
            let err = distance_to_target(Point::ORIGIN, Point::new(1.0, 1.0), ppy).unwrap_err();
            assert!(matches!(err, CalibrationError::InvalidScale(_)));
        }
    }

    #[test]
    fn test_calibration_measures_to_pin() {
        let calibration =
            Calibration::new(Point::new(50.0, 950.0), Point::new(50.0, 50.0), 450.0).unwrap();

        assert_eq!(calibration.pixels_per_yard(), 2.0);
        assert_eq!(calibration.distance_to_pin(Point::new(50.0, 950.0)), 450.0);
        assert_eq!(calibration.distance_to_pin(Point::new(50.0, 250.0)), 100.0);
        assert_eq!(calibration.distance_to_pin(Point::new(50.0, 50.0)), 0.0);
    }

    #[test]
    fn test_distance_between_is_independent_of_pin() {
        let calibration =
            Calibration::new(Point::new(0.0, 0.0), Point::new(0.0, 800.0), 400.0).unwrap();
        let yards = calibration.distance_between(Point::new(0.0, 0.0), Point::new(60.0, 80.0));
        assert!((yards - 50.0).abs() < 1e-12);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_tee_is_always_hole_yardage_from_pin(
                tx in -1000.0..1000.0_f64,
                ty in -1000.0..1000.0_f64,
                px in -1000.0..1000.0_f64,
                py in -1000.0..1000.0_f64,
                yardage in 50.0..700.0_f64
            ) {
                let tee = Point::new(tx, ty);
                let pin = Point::new(px, py);
                prop_assume!(tee.distance_to(&pin) > 1e-6);

                let calibration = Calibration::new(tee, pin, yardage)?;
                let measured = calibration.distance_to_pin(tee);

                prop_assert!(
                    (measured - yardage).abs() < 1e-6 * yardage,
                    "Tee measured {} yards from pin, expected {}",
                    measured, yardage
                );
            }

            #[test]
            fn test_distance_is_non_negative(
                x in -1000.0..1000.0_f64,
                y in -1000.0..1000.0_f64,
                ppy in 0.01..50.0_f64
            ) {
                let yards = distance_to_target(Point::new(x, y), Point::ORIGIN, ppy)?;
                prop_assert!(yards >= 0.0);
            }
        }
    }
}
