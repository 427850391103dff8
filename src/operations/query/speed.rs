use std::fmt;

use crate::geometry::ArcLengthCurve;

use super::{Slope, DEFAULT_DELTA};

/// Pacing band a slope falls into.
///
/// Bands are tested in declaration order and the first match wins, so a slope
/// sitting exactly on a threshold drops to the next band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedBand {
    /// Slope above `0.15`: a chain-driven lift.
    Lift,
    /// Slope above `0.05`.
    GentleUphill,
    /// Slope below `-0.5`.
    MegaDrop,
    /// Slope below `-0.3`.
    SteepDownhill,
    /// Slope below `-0.1`.
    MediumDownhill,
    /// Anything else, including NaN.
    Flat,
}

impl SpeedBand {
    /// Classifies a grade.
    #[must_use]
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.15 {
            Self::Lift
        } else if slope > 0.05 {
            Self::GentleUphill
        } else if slope < -0.5 {
            Self::MegaDrop
        } else if slope < -0.3 {
            Self::SteepDownhill
        } else if slope < -0.1 {
            Self::MediumDownhill
        } else {
            Self::Flat
        }
    }

    /// Speed multiplier applied to traversal while in this band.
    #[must_use]
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Lift => 0.3,
            Self::GentleUphill => 0.6,
            Self::MegaDrop => 4.0,
            Self::SteepDownhill => 3.0,
            Self::MediumDownhill => 1.8,
            Self::Flat => 1.0,
        }
    }
}

impl fmt::Display for SpeedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lift => "lift",
            Self::GentleUphill => "gentle uphill",
            Self::MegaDrop => "mega drop",
            Self::SteepDownhill => "steep downhill",
            Self::MediumDownhill => "medium downhill",
            Self::Flat => "flat",
        };
        f.write_str(name)
    }
}

/// Maps a grade directly to its speed multiplier.
#[must_use]
pub fn speed_multiplier_for_slope(slope: f64) -> f64 {
    SpeedBand::from_slope(slope).multiplier()
}

/// Speed multiplier at a point on the ride curve.
pub struct SpeedMultiplier {
    t: f64,
    delta: f64,
}

impl SpeedMultiplier {
    /// Creates a new `SpeedMultiplier` query at arc-length parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self {
            t,
            delta: DEFAULT_DELTA,
        }
    }

    /// Overrides the slope window.
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Returns the band the local slope falls into.
    #[must_use]
    pub fn band(&self, curve: &ArcLengthCurve) -> SpeedBand {
        SpeedBand::from_slope(Slope::new(self.t).with_delta(self.delta).execute(curve))
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, curve: &ArcLengthCurve) -> f64 {
        self.band(curve).multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_curve;
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn multiplier_per_band() {
        let cases = [
            (0.2, 0.3),
            (0.10, 0.6),
            (-0.6, 4.0),
            (-0.35, 3.0),
            (-0.2, 1.8),
            (0.0, 1.0),
        ];
        for (slope, expected) in cases {
            assert_relative_eq!(speed_multiplier_for_slope(slope), expected);
        }
    }

    #[test]
    fn thresholds_fall_to_next_band() {
        assert_eq!(SpeedBand::from_slope(0.15), SpeedBand::GentleUphill);
        assert_eq!(SpeedBand::from_slope(0.05), SpeedBand::Flat);
        assert_eq!(SpeedBand::from_slope(-0.5), SpeedBand::SteepDownhill);
        assert_eq!(SpeedBand::from_slope(-0.3), SpeedBand::MediumDownhill);
        assert_eq!(SpeedBand::from_slope(-0.1), SpeedBand::Flat);
    }

    #[test]
    fn extreme_slopes() {
        assert_eq!(SpeedBand::from_slope(f64::NEG_INFINITY), SpeedBand::MegaDrop);
        assert_eq!(SpeedBand::from_slope(f64::INFINITY), SpeedBand::Lift);
        assert_eq!(SpeedBand::from_slope(f64::NAN), SpeedBand::Flat);
    }

    #[test]
    fn multiplier_on_curve() {
        let steep = test_curve(&[Point3::new(0.0, 100.0, 0.0), Point3::new(0.0, 60.0, -100.0)]);
        assert_eq!(SpeedMultiplier::new(0.5).band(&steep), SpeedBand::SteepDownhill);
        assert_relative_eq!(SpeedMultiplier::new(0.5).execute(&steep), 3.0);

        let flat = test_curve(&[Point3::new(0.0, 10.0, 0.0), Point3::new(0.0, 10.0, -100.0)]);
        assert_relative_eq!(SpeedMultiplier::new(0.5).execute(&flat), 1.0);
    }
}
