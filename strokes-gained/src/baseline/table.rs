//! Sparse baseline tables with piecewise-linear lookup.

/// Unit the sample distances of a table are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Yards,
    Feet,
}

impl DistanceUnit {
    /// Short suffix for display.
    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Yards => "yd",
            DistanceUnit::Feet => "ft",
        }
    }
}

/// Immutable mapping from distance to expected strokes-to-finish.
///
/// Samples are `(distance, expected_strokes)` pairs sorted by strictly
/// increasing distance with non-decreasing values. A table needs at least two
/// samples so that the extrapolation slope is defined.
#[derive(Debug)]
pub struct BaselineTable {
    name: &'static str,
    unit: DistanceUnit,
    samples: &'static [(f64, f64)],
}

impl BaselineTable {
    /// Wrap a static sample slice.
    pub const fn new(
        name: &'static str,
        unit: DistanceUnit,
        samples: &'static [(f64, f64)],
    ) -> Self {
        Self {
            name,
            unit,
            samples,
        }
    }

    /// Table name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unit of the sample distances.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// The raw samples.
    pub fn samples(&self) -> &'static [(f64, f64)] {
        self.samples
    }

    /// Expected strokes at `distance` (in this table's unit).
    ///
    /// - At or below the first sample: the first sample's value.
    /// - At or above the last sample: linear extrapolation along the slope
    ///   of the last two samples.
    /// - In between: binary search for the bracketing samples, then linear
    ///   interpolation. Exact sample distances return the sample value.
    pub fn value_at(&self, distance: f64) -> f64 {
        let samples = self.samples;
        debug_assert!(samples.len() >= 2, "baseline table needs two samples");

        let (first_distance, first_value) = samples[0];
        if distance <= first_distance {
            return first_value;
        }

        let (last_distance, last_value) = samples[samples.len() - 1];
        if distance >= last_distance {
            let (prev_distance, prev_value) = samples[samples.len() - 2];
            let slope = (last_value - prev_value) / (last_distance - prev_distance);
            return last_value + slope * (distance - last_distance);
        }

        // First sample at or beyond `distance`; always in 1..len-1 here.
        let upper = samples.partition_point(|&(d, _)| d < distance);
        let (d2, v2) = samples[upper];
        if d2 == distance {
            return v2;
        }
        let (d1, v1) = samples[upper - 1];
        let ratio = (distance - d1) / (d2 - d1);
        v1 + ratio * (v2 - v1)
    }
}
