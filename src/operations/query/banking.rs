use crate::geometry::ArcLengthCurve;

use super::{window, DEFAULT_BANKING_SCALE, DEFAULT_DELTA};

/// Roll proxy: scaled x-axis displacement across a small window.
///
/// This is a cheap stand-in for a bank angle, not one derived from curvature.
pub struct Banking {
    t: f64,
    delta: f64,
    scale: f64,
}

impl Banking {
    /// Creates a new `Banking` query at arc-length parameter `t`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self {
            t,
            delta: DEFAULT_DELTA,
            scale: DEFAULT_BANKING_SCALE,
        }
    }

    /// Overrides the finite-difference half-window.
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Overrides the displacement scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, curve: &ArcLengthCurve) -> f64 {
        let (t1, t2) = window(self.t, self.delta);
        let dx = curve.point_at(t2).x - curve.point_at(t1).x;
        dx * self.scale
    }
}
