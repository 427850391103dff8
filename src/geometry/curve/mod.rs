mod arc_length;
mod catmull_rom;

pub use arc_length::ArcLengthCurve;
pub use catmull_rom::{CatmullRom, Parametrization, CATMULL_ROM_TENSION};

use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit domain `[0, 1]` shared by all ride curves.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Clamps `t` into this domain.
    #[must_use]
    pub fn clamp(&self, t: f64) -> f64 {
        if t.is_nan() {
            self.t_min
        } else {
            t.clamp(self.t_min, self.t_max)
        }
    }
}

/// Trait for parametric curves in 3D space.
///
/// Evaluation is total: parameters outside the domain are clamped, never rejected.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// First derivative with respect to `t`. May be zero at cusps.
    fn derivative(&self, t: f64) -> Vector3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}
