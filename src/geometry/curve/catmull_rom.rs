use crate::error::{CourseError, Result};
use crate::math::{Point3, Vector3};

use super::{Curve, CurveDomain};

/// Tension applied to uniform Catmull-Rom tangents. `0.5` is the classic spline.
pub const CATMULL_ROM_TENSION: f64 = 0.5;

/// Knot spacing used when deriving segment tangents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parametrization {
    /// Equal knot spacing between consecutive points.
    #[default]
    Uniform,
    /// Knot spacing proportional to the square root of the chord length.
    Centripetal,
    /// Knot spacing proportional to the chord length. Overshoots least on
    /// long flat runs that end in short steep drops.
    Chordal,
}

impl Parametrization {
    /// Exponent applied to the squared chord length, or `None` for uniform knots.
    fn knot_exponent(self) -> Option<f64> {
        match self {
            Self::Uniform => None,
            Self::Centripetal => Some(0.25),
            Self::Chordal => Some(0.5),
        }
    }
}

/// Cubic polynomial `c0 + c1 w + c2 w^2 + c3 w^3` for one span, `w` in `[0, 1]`.
#[derive(Debug, Clone, Copy)]
struct CubicSegment {
    c0: Vector3,
    c1: Vector3,
    c2: Vector3,
    c3: Vector3,
}

impl CubicSegment {
    /// Hermite form from endpoint positions and endpoint tangents.
    fn hermite(p0: Vector3, p1: Vector3, m0: Vector3, m1: Vector3) -> Self {
        Self {
            c0: p0,
            c1: m0,
            c2: p0 * -3.0 + p1 * 3.0 - m0 * 2.0 - m1,
            c3: p0 * 2.0 - p1 * 2.0 + m0 + m1,
        }
    }

    fn point(&self, w: f64) -> Vector3 {
        let w2 = w * w;
        self.c0 + self.c1 * w + self.c2 * w2 + self.c3 * (w2 * w)
    }

    fn derivative(&self, w: f64) -> Vector3 {
        self.c1 + self.c2 * (2.0 * w) + self.c3 * (3.0 * w * w)
    }
}

/// An open Catmull-Rom spline through an ordered list of control points.
///
/// Each span between consecutive control points owns an equal share of the
/// parameter range `[0, 1]`, so control point `i` sits at `t = i / (n - 1)`.
/// The parametrization only changes how span tangents are derived.
/// End tangents come from phantom points mirrored across the first and last
/// control points.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Point3>,
    segments: Vec<CubicSegment>,
    parametrization: Parametrization,
}

impl CatmullRom {
    /// Builds the spline.
    ///
    /// # Errors
    ///
    /// Returns [`CourseError::InvalidCourseDefinition`] if fewer than two
    /// points are supplied or any coordinate is not finite.
    pub fn new(points: Vec<Point3>, parametrization: Parametrization) -> Result<Self> {
        if points.len() < 2 {
            return Err(CourseError::InvalidCourseDefinition(format!(
                "at least 2 control points are required, got {}",
                points.len()
            ))
            .into());
        }
        if let Some(index) = points.iter().position(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(CourseError::InvalidCourseDefinition(format!(
                "control point {index} has a non-finite coordinate"
            ))
            .into());
        }

        let n = points.len();
        let at = |i: usize| points[i].coords;
        // Mirrored phantom points extend the open ends.
        let before_first = at(0) * 2.0 - at(1);
        let after_last = at(n - 1) * 2.0 - at(n - 2);

        let segments = (0..n - 1)
            .map(|i| {
                let x0 = if i == 0 { before_first } else { at(i - 1) };
                let x1 = at(i);
                let x2 = at(i + 1);
                let x3 = if i + 2 < n { at(i + 2) } else { after_last };
                let (m0, m1) = match parametrization.knot_exponent() {
                    None => (
                        (x2 - x0) * CATMULL_ROM_TENSION,
                        (x3 - x1) * CATMULL_ROM_TENSION,
                    ),
                    Some(exponent) => nonuniform_tangents(x0, x1, x2, x3, exponent),
                };
                CubicSegment::hermite(x1, x2, m0, m1)
            })
            .collect();

        Ok(Self {
            points,
            segments,
            parametrization,
        })
    }

    /// Returns the control points the spline interpolates.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the knot parametrization used for the tangents.
    #[must_use]
    pub fn parametrization(&self) -> Parametrization {
        self.parametrization
    }

    /// Returns the number of spans (control points minus one).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Parameter at which control point `index` is interpolated.
    #[must_use]
    pub fn knot_parameter(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let t = index.min(self.segments.len()) as f64 / self.segments.len() as f64;
        t
    }

    /// Maps a clamped global parameter to a span index and local weight.
    fn locate(&self, t: f64) -> (usize, f64) {
        let count = self.segments.len();
        #[allow(clippy::cast_precision_loss)]
        let scaled = self.domain().clamp(t) * count as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (scaled.floor() as usize).min(count - 1);
        #[allow(clippy::cast_precision_loss)]
        let weight = scaled - index as f64;
        (index, weight)
    }
}

/// Non-uniform Catmull-Rom tangents for span `x1 -> x2`, rescaled to the
/// span's unit parameter interval.
fn nonuniform_tangents(
    x0: Vector3,
    x1: Vector3,
    x2: Vector3,
    x3: Vector3,
    exponent: f64,
) -> (Vector3, Vector3) {
    let mut dt0 = (x1 - x0).norm_squared().powf(exponent);
    let mut dt1 = (x2 - x1).norm_squared().powf(exponent);
    let mut dt2 = (x3 - x2).norm_squared().powf(exponent);

    // Coincident points would divide by zero; borrow a neighbouring interval.
    if dt1 < 1e-4 {
        dt1 = 1.0;
    }
    if dt0 < 1e-4 {
        dt0 = dt1;
    }
    if dt2 < 1e-4 {
        dt2 = dt1;
    }

    let m1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
    let m2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;
    (m1, m2)
}

impl Curve for CatmullRom {
    fn evaluate(&self, t: f64) -> Point3 {
        let (index, weight) = self.locate(t);
        Point3::from(self.segments[index].point(weight))
    }

    fn derivative(&self, t: f64) -> Vector3 {
        let (index, weight) = self.locate(t);
        #[allow(clippy::cast_precision_loss)]
        let scale = self.segments.len() as f64;
        self.segments[index].derivative(weight) * scale
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn is_closed(&self) -> bool {
        false
    }
}
