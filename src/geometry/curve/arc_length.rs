use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::{clamp_unit, Point3, Vector3, TOLERANCE};

use super::{CatmullRom, Curve};

/// A curve re-parametrized by normalized arc length.
///
/// `u` in `[0, 1]` is the fraction of total length traveled; equal steps in `u`
/// cover equal distances. The mapping to the raw curve parameter `t` is a
/// piecewise-linear inverse of a cumulative length table sampled at
/// `divisions + 1` uniformly spaced raw parameters.
#[derive(Debug, Clone)]
pub struct ArcLengthCurve {
    curve: CatmullRom,
    lengths: Vec<f64>,
}

impl ArcLengthCurve {
    /// Measures `curve` and builds the length table.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero or the curve has no measurable length.
    pub fn new(curve: CatmullRom, divisions: usize) -> Result<Self> {
        if divisions == 0 {
            return Err(GeometryError::InvalidParameters(
                "arc-length divisions must be at least 1".into(),
            )
            .into());
        }

        let mut lengths = Vec::with_capacity(divisions + 1);
        let mut total = 0.0;
        let mut previous = curve.evaluate(0.0);
        lengths.push(0.0);
        for i in 1..=divisions {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / divisions as f64;
            let current = curve.evaluate(t);
            total += (current - previous).norm();
            lengths.push(total);
            previous = current;
        }

        if total < TOLERANCE {
            return Err(GeometryError::Degenerate("curve has zero arc length".into()).into());
        }
        debug!(divisions, total, "arc-length table built");

        Ok(Self { curve, lengths })
    }

    /// Returns the underlying raw-parameter curve.
    #[must_use]
    pub fn curve(&self) -> &CatmullRom {
        &self.curve
    }

    /// Total arc length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.lengths[self.lengths.len() - 1]
    }

    fn divisions(&self) -> usize {
        self.lengths.len() - 1
    }

    /// Converts a normalized arc-length parameter into the raw curve parameter.
    #[must_use]
    pub fn u_to_t(&self, u: f64) -> f64 {
        let divisions = self.divisions();
        let target = clamp_unit(u) * self.length();
        // lengths[0] == 0.0, so at least one entry is <= target.
        let index = self.lengths.partition_point(|&l| l <= target) - 1;
        if index >= divisions {
            return 1.0;
        }
        let start = self.lengths[index];
        let span = self.lengths[index + 1] - start;
        let fraction = if span > 0.0 {
            (target - start) / span
        } else {
            0.0
        };
        #[allow(clippy::cast_precision_loss)]
        let t = (index as f64 + fraction) / divisions as f64;
        t
    }

    /// Converts a raw curve parameter into the normalized arc-length parameter.
    #[must_use]
    pub fn t_to_u(&self, t: f64) -> f64 {
        let divisions = self.divisions();
        #[allow(clippy::cast_precision_loss)]
        let scaled = clamp_unit(t) * divisions as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (scaled.floor() as usize).min(divisions - 1);
        #[allow(clippy::cast_precision_loss)]
        let weight = scaled - index as f64;
        let start = self.lengths[index];
        let distance = start + weight * (self.lengths[index + 1] - start);
        (distance / self.length()).min(1.0)
    }

    /// Point reached after traveling fraction `u` of the total length.
    #[must_use]
    pub fn point_at(&self, u: f64) -> Point3 {
        self.curve.evaluate(self.u_to_t(u))
    }

    /// Unit direction of travel at arc-length parameter `u`.
    ///
    /// Falls back to a finite-difference chord where the spline has a cusp
    /// (zero derivative at repeated control points).
    #[must_use]
    pub fn tangent_at(&self, u: f64) -> Vector3 {
        let u = clamp_unit(u);
        if let Some(tangent) = self
            .curve
            .derivative(self.u_to_t(u))
            .try_normalize(TOLERANCE)
        {
            return tangent;
        }

        let h = 1e-4;
        let chord = self.point_at(u + h) - self.point_at(u - h);
        chord
            .try_normalize(TOLERANCE)
            .or_else(|| (self.point_at(1.0) - self.point_at(0.0)).try_normalize(TOLERANCE))
            .unwrap_or_else(|| -Vector3::z())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::FlumeError;
    use crate::geometry::Parametrization;
    use approx::assert_relative_eq;

    fn line_3_4_5() -> ArcLengthCurve {
        let curve = CatmullRom::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            Parametrization::Uniform,
        )
        .unwrap();
        ArcLengthCurve::new(curve, 64).unwrap()
    }

    fn s_curve() -> ArcLengthCurve {
        let curve = CatmullRom::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, -2.0, -50.0),
                Point3::new(-10.0, -4.0, -100.0),
                Point3::new(0.0, -6.0, -150.0),
            ],
            Parametrization::Uniform,
        )
        .unwrap();
        ArcLengthCurve::new(curve, 4000).unwrap()
    }

    #[test]
    fn line_length_3_4_5() {
        let c = line_3_4_5();
        assert_relative_eq!(c.length(), 5.0, epsilon = 1e-9);
        let mid = c.point_at(0.5);
        assert_relative_eq!(mid.x, 1.5, epsilon = 1e-9);
        assert_relative_eq!(mid.y, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn tangent_is_unit_direction_of_travel() {
        let c = line_3_4_5();
        let tangent = c.tangent_at(0.3);
        assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tangent.x, 0.6, epsilon = 1e-9);
        assert_relative_eq!(tangent.y, 0.8, epsilon = 1e-9);
    }

    #[test]
    fn equal_parameter_steps_cover_equal_distances() {
        let c = s_curve();
        let steps: Vec<f64> = (0..100)
            .map(|k| {
                let a = c.point_at(f64::from(k) / 100.0);
                let b = c.point_at(f64::from(k + 1) / 100.0);
                (b - a).norm()
            })
            .collect();
        let min = steps.iter().copied().fold(f64::INFINITY, f64::min);
        let max = steps.iter().copied().fold(0.0, f64::max);
        assert!(max / min < 1.02, "steps vary from {min} to {max}");
    }

    #[test]
    fn t_and_u_round_trip() {
        let c = s_curve();
        for k in 0..=50 {
            let u = f64::from(k) / 50.0;
            assert_relative_eq!(c.t_to_u(c.u_to_t(u)), u, epsilon = 1e-9);
        }
    }

    #[test]
    fn u_to_t_is_non_decreasing() {
        let c = s_curve();
        let mut last = 0.0;
        for k in 0..=500 {
            let t = c.u_to_t(f64::from(k) / 500.0);
            assert!(t >= last);
            last = t;
        }
        assert_relative_eq!(last, 1.0);
    }

    #[test]
    fn zero_length_curve_is_degenerate() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let curve = CatmullRom::new(vec![p, p, p], Parametrization::Chordal).unwrap();
        let err = ArcLengthCurve::new(curve, 100).unwrap_err();
        assert!(matches!(
            err,
            FlumeError::Geometry(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn zero_divisions_rejected() {
        let curve = line_3_4_5().curve().clone();
        assert!(ArcLengthCurve::new(curve, 0).is_err());
    }

    #[test]
    fn tangent_survives_repeated_control_points() {
        let curve = CatmullRom::new(
            vec![
                Point3::new(0.0, 10.0, 0.0),
                Point3::new(0.0, 5.0, -10.0),
                Point3::new(0.0, 5.0, -10.0),
                Point3::new(0.0, 0.0, -20.0),
            ],
            Parametrization::Uniform,
        )
        .unwrap();
        let c = ArcLengthCurve::new(curve, 1000).unwrap();
        for k in 0..=20 {
            let tangent = c.tangent_at(f64::from(k) / 20.0);
            assert_relative_eq!(tangent.norm(), 1.0, epsilon = 1e-9);
        }
    }
}
