use crate::geometry::ArcLengthCurve;

use super::{window, DEFAULT_CURVATURE_SCALE, DEFAULT_DELTA};

/// Curvature proxy: scaled angle between the tangents either side of a point.
pub struct Curvature {
    t: f64,
    delta: f64,
    scale: f64,
}

impl Curvature {
    /// Creates a new `Curvature` query at arc-length parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self {
            t,
            delta: DEFAULT_DELTA,
            scale: DEFAULT_CURVATURE_SCALE,
        }
    }

    /// Overrides the finite-difference half-window.
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Overrides the angle scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Executes the query. Always non-negative.
    #[must_use]
    pub fn execute(&self, curve: &ArcLengthCurve) -> f64 {
        let (t1, t2) = window(self.t, self.delta);
        let before = curve.tangent_at(t1);
        let after = curve.tangent_at(t2);
        before.angle(&after) * self.scale
    }
}
