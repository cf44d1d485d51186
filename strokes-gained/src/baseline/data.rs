//! Tour-average baseline data.
//!
//! Expected strokes to hole out, from published PGA Tour benchmarks
//! (Broadie). Process-wide constants; never mutated.

use super::table::{BaselineTable, DistanceUnit};
use crate::shot::LieType;

/// Expected strokes from the fairway by distance to the hole (yards).
///
/// Other non-green lies are expressed as an offset on top of this table,
/// see [`lie_adjustment`].
pub static THROUGH_THE_GREEN: BaselineTable = BaselineTable::new(
    "through-the-green",
    DistanceUnit::Yards,
    &[
        (1.0, 1.00),
        (2.0, 1.01),
        (3.0, 1.03),
        (4.0, 1.06),
        (5.0, 1.08),
        (10.0, 1.15),
        (15.0, 1.23),
        (20.0, 1.32),
        (25.0, 1.41),
        (30.0, 1.50),
        (40.0, 1.65),
        (50.0, 1.78),
        (60.0, 1.89),
        (70.0, 1.99),
        (80.0, 2.08),
        (90.0, 2.17),
        (100.0, 2.26),
        (110.0, 2.34),
        (120.0, 2.42),
        (130.0, 2.50),
        (140.0, 2.57),
        (150.0, 2.64),
        (160.0, 2.71),
        (170.0, 2.78),
        (180.0, 2.85),
        (190.0, 2.91),
        (200.0, 2.97),
        (210.0, 3.03),
        (220.0, 3.09),
        (230.0, 3.15),
        (240.0, 3.21),
        (250.0, 3.27),
        (260.0, 3.33),
        (270.0, 3.38),
        (280.0, 3.44),
        (290.0, 3.50),
        (300.0, 3.55),
        (320.0, 3.66),
        (340.0, 3.77),
        (360.0, 3.87),
        (380.0, 3.97),
        (400.0, 4.07),
        (420.0, 4.17),
        (440.0, 4.27),
        (460.0, 4.37),
        (480.0, 4.47),
        (500.0, 4.56),
        (550.0, 4.79),
        (600.0, 5.01),
    ],
);

/// Expected strokes on the green by distance to the hole (feet).
pub static PUTTING: BaselineTable = BaselineTable::new(
    "putting",
    DistanceUnit::Feet,
    &[
        (1.0, 1.00),
        (2.0, 1.01),
        (3.0, 1.04),
        (4.0, 1.08),
        (5.0, 1.12),
        (6.0, 1.17),
        (7.0, 1.22),
        (8.0, 1.27),
        (9.0, 1.32),
        (10.0, 1.37),
        (12.0, 1.46),
        (14.0, 1.54),
        (16.0, 1.61),
        (18.0, 1.67),
        (20.0, 1.73),
        (25.0, 1.85),
        (30.0, 1.95),
        (35.0, 2.03),
        (40.0, 2.10),
        (45.0, 2.16),
        (50.0, 2.21),
        (60.0, 2.31),
        (70.0, 2.39),
        (80.0, 2.46),
        (90.0, 2.52),
        (100.0, 2.57),
    ],
);

/// Additive offset applied to the through-the-green baseline for a lie.
///
/// `green` is scored from the putting table and carries no offset.
pub const fn lie_adjustment(lie: LieType) -> f64 {
    match lie {
        LieType::Tee => -0.05,
        LieType::Fairway => 0.0,
        LieType::Rough => 0.15,
        LieType::Bunker => 0.40,
        LieType::Green => 0.0,
        LieType::Fringe => 0.05,
        LieType::Recovery => 0.80,
    }
}
