use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{CatmullRom, Curve};
use crate::math::Point3;

/// Default number of uniform parameter steps taken over the raw curve.
pub const DEFAULT_DESCENT_SAMPLES: usize = 2000;

/// Diagnostics from a descent-enforcement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescentReport {
    /// Number of points sampled from the raw curve.
    pub samples: usize,
    /// Number of samples whose elevation was lowered.
    pub clamped: usize,
}

/// Rewrites elevations in place so they never increase along the sequence.
///
/// Any sample above the lowest elevation seen so far is lowered to it; `x` and
/// `z` are left untouched. Returns the number of samples that were lowered.
pub fn clamp_descent(samples: &mut [Point3]) -> usize {
    let Some(first) = samples.first() else {
        return 0;
    };
    let mut running_min = first.y;
    let mut clamped = 0;
    for sample in samples.iter_mut().skip(1) {
        if sample.y > running_min {
            sample.y = running_min;
            clamped += 1;
        } else {
            running_min = sample.y;
        }
    }
    clamped
}

/// Resamples a raw curve, flattens every ascent, and refits the spline.
///
/// Descent is guaranteed at the sampled points only. Between samples the
/// refit spline may bump by a small fraction of one sample's elevation step
/// where a flattened run meets a descent.
pub struct EnforceDescent {
    samples: usize,
}

impl EnforceDescent {
    /// Creates a new `EnforceDescent` operation taking `samples` parameter steps.
    #[must_use]
    pub fn new(samples: usize) -> Self {
        Self { samples }
    }

    /// Executes the pass, returning the rebuilt curve and its report.
    ///
    /// The rebuilt curve keeps the raw curve's parametrization. Sample `i`
    /// lands at the same raw parameter `i / samples` on both curves.
    ///
    /// # Errors
    ///
    /// Returns an error if the step count is zero.
    pub fn execute(&self, raw: &CatmullRom) -> Result<(CatmullRom, DescentReport)> {
        if self.samples == 0 {
            return Err(GeometryError::InvalidParameters(
                "descent sample count must be at least 1".into(),
            )
            .into());
        }

        let mut points: Vec<Point3> = (0..=self.samples)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / self.samples as f64;
                raw.evaluate(t)
            })
            .collect();

        let clamped = clamp_descent(&mut points);
        let report = DescentReport {
            samples: points.len(),
            clamped,
        };
        debug!(samples = report.samples, clamped, "descent enforced");

        let curve = CatmullRom::new(points, raw.parametrization())?;
        Ok((curve, report))
    }
}

impl Default for EnforceDescent {
    fn default() -> Self {
        Self::new(DEFAULT_DESCENT_SAMPLES)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Parametrization;
    use approx::assert_relative_eq;

    fn rising_finish() -> CatmullRom {
        CatmullRom::new(
            vec![
                Point3::new(0.0, 100.0, 0.0),
                Point3::new(0.0, 50.0, -100.0),
                Point3::new(0.0, 80.0, -200.0),
            ],
            Parametrization::Uniform,
        )
        .unwrap()
    }

    #[test]
    fn clamp_lowers_ascents_to_running_minimum() {
        let mut samples = vec![
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(1.0, 8.0, -1.0),
            Point3::new(2.0, 9.0, -2.0),
            Point3::new(3.0, 12.0, -3.0),
            Point3::new(4.0, 7.0, -4.0),
            Point3::new(5.0, 7.5, -5.0),
        ];
        let clamped = clamp_descent(&mut samples);
        assert_eq!(clamped, 3);
        let heights: Vec<f64> = samples.iter().map(|p| p.y).collect();
        assert_eq!(heights, vec![10.0, 8.0, 8.0, 8.0, 7.0, 7.0]);
        for (p, x) in samples.iter().zip([0.0, 1.0, 2.0, 3.0, 4.0, 5.0]) {
            assert_relative_eq!(p.x, x);
            assert_relative_eq!(p.z, -x);
        }
    }

    #[test]
    fn clamp_on_descending_sequence_is_a_no_op() {
        let original: Vec<Point3> = (0..50)
            .map(|i| Point3::new(0.0, 100.0 - f64::from(i / 3), -f64::from(i)))
            .collect();
        let mut samples = original.clone();
        assert_eq!(clamp_descent(&mut samples), 0);
        assert_eq!(samples, original);
        assert_eq!(clamp_descent(&mut samples), 0);
    }

    #[test]
    fn clamp_on_empty_slice() {
        assert_eq!(clamp_descent(&mut []), 0);
    }

    #[test]
    fn finish_is_held_at_running_minimum() {
        let (curve, report) = EnforceDescent::default().execute(&rising_finish()).unwrap();
        assert_eq!(report.samples, DEFAULT_DESCENT_SAMPLES + 1);
        assert!(report.clamped > 0);
        for k in 0..=50 {
            let t = 0.95 + 0.05 * f64::from(k) / 50.0;
            assert!(curve.evaluate(t).y <= 50.0, "ascent at t = {t}");
        }
    }

    #[test]
    fn horizontal_path_is_preserved() {
        let raw = rising_finish();
        let (curve, _) = EnforceDescent::new(400).execute(&raw).unwrap();
        for (i, p) in curve.points().iter().enumerate() {
            let q = raw.evaluate(curve.knot_parameter(i));
            assert_relative_eq!(p.x, q.x, epsilon = 1e-12);
            assert_relative_eq!(p.z, q.z, epsilon = 1e-12);
            assert!(p.y <= q.y + 1e-12);
        }
    }

    #[test]
    fn sampled_elevations_never_rise() {
        let (curve, _) = EnforceDescent::default().execute(&rising_finish()).unwrap();
        for pair in curve.points().windows(2) {
            assert!(pair[1].y <= pair[0].y);
        }
        let mut previous = curve.evaluate(0.0).y;
        for k in 1..=2000 {
            let y = curve.evaluate(f64::from(k) / 2000.0).y;
            assert!(y <= previous + 0.05);
            previous = previous.min(y);
        }
    }

    #[test]
    fn already_descending_curve_is_unchanged() {
        let pts: Vec<Point3> = (0..6)
            .map(|i| Point3::new(0.0, 60.0 - f64::from(i) * 12.0, -f64::from(i) * 40.0))
            .collect();
        let raw = CatmullRom::new(pts, Parametrization::Uniform).unwrap();
        let (curve, report) = EnforceDescent::new(500).execute(&raw).unwrap();
        assert_eq!(report.clamped, 0);
        for k in 0..=100 {
            let t = f64::from(k) / 100.0;
            assert_relative_eq!((curve.evaluate(t) - raw.evaluate(t)).norm(), 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn second_pass_clamps_nothing() {
        let (once, first) = EnforceDescent::default().execute(&rising_finish()).unwrap();
        assert!(first.clamped > 0);
        let (twice, second) = EnforceDescent::default().execute(&once).unwrap();
        assert_eq!(second.clamped, 0);
        for k in 0..=1000 {
            let t = f64::from(k) / 1000.0;
            assert_relative_eq!((twice.evaluate(t) - once.evaluate(t)).norm(), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn zero_samples_rejected() {
        assert!(EnforceDescent::new(0).execute(&rising_finish()).is_err());
    }
}
