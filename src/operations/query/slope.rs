use crate::geometry::ArcLengthCurve;
use crate::math::{horizontal_distance, TOLERANCE};

use super::{window, DEFAULT_DELTA};

/// Grade (rise over horizontal run) of the ride curve at a point.
///
/// Negative values descend. A purely vertical window yields a signed
/// infinity; a window with no displacement at all yields `0.0`.
pub struct Slope {
    t: f64,
    delta: f64,
}

impl Slope {
    /// Creates a new `Slope` query at arc-length parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self {
            t,
            delta: DEFAULT_DELTA,
        }
    }

    /// Overrides the finite-difference half-window.
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, curve: &ArcLengthCurve) -> f64 {
        let (t1, t2) = window(self.t, self.delta);
        let p1 = curve.point_at(t1);
        let p2 = curve.point_at(t2);

        let rise = p2.y - p1.y;
        let run = horizontal_distance(&p1, &p2);
        if run >= TOLERANCE {
            rise / run
        } else if rise.abs() < TOLERANCE {
            0.0
        } else {
            f64::INFINITY.copysign(rise)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_curve;
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn constant_grade() {
        let curve = test_curve(&[Point3::new(0.0, 50.0, 0.0), Point3::new(0.0, 40.0, -100.0)]);
        for t in [0.0, 0.25, 0.5, 1.0] {
            assert_relative_eq!(Slope::new(t).execute(&curve), -0.1, epsilon = 1e-9);
        }
    }

    #[test]
    fn out_of_range_parameters_are_clamped() {
        let curve = test_curve(&[Point3::new(0.0, 50.0, 0.0), Point3::new(0.0, 40.0, -100.0)]);
        assert_relative_eq!(Slope::new(-4.0).execute(&curve), -0.1, epsilon = 1e-9);
        assert_relative_eq!(Slope::new(7.0).execute(&curve), -0.1, epsilon = 1e-9);
    }

    #[test]
    fn vertical_drop_is_negative_infinity() {
        let curve = test_curve(&[Point3::new(2.0, 50.0, 3.0), Point3::new(2.0, 0.0, 3.0)]);
        let slope = Slope::new(0.5).execute(&curve);
        assert!(slope.is_infinite() && slope < 0.0);
    }

    #[test]
    fn wider_window_still_measures_grade() {
        let curve = test_curve(&[Point3::new(0.0, 0.0, 0.0), Point3::new(30.0, 3.0, -40.0)]);
        let slope = Slope::new(0.5).with_delta(0.2).execute(&curve);
        assert_relative_eq!(slope, 0.06, epsilon = 1e-9);
    }
}
