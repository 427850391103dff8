//! Per-frame kinematic queries over an arc-length parametrized ride curve.
//!
//! Every query clamps its parameter into `[0, 1]` and never fails. The
//! derivative signals are central finite differences taken `delta` either
//! side of the query point; near the ends the clamped window turns them into
//! one-sided differences.

mod banking;
mod curvature;
mod slope;
mod speed;

pub use banking::Banking;
pub use curvature::Curvature;
pub use slope::Slope;
pub use speed::{speed_multiplier_for_slope, SpeedBand, SpeedMultiplier};

use crate::math::clamp_unit;

/// Default finite-difference half-window in normalized arc length.
pub const DEFAULT_DELTA: f64 = 0.001;

/// Default factor turning lateral displacement into a banking value.
pub const DEFAULT_BANKING_SCALE: f64 = 2.0;

/// Default factor turning the tangent turn angle into a curvature value.
pub const DEFAULT_CURVATURE_SCALE: f64 = 500.0;

/// Clamped sample window `(t - delta, t + delta)` around a clamped `t`.
fn window(t: f64, delta: f64) -> (f64, f64) {
    let t = clamp_unit(t);
    (clamp_unit(t - delta), clamp_unit(t + delta))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
fn test_curve(points: &[crate::math::Point3]) -> crate::geometry::ArcLengthCurve {
    use crate::geometry::{ArcLengthCurve, CatmullRom, Parametrization};
    let curve = CatmullRom::new(points.to_vec(), Parametrization::Uniform).unwrap();
    ArcLengthCurve::new(curve, 4000).unwrap()
}
