use crate::error::Result;
use crate::geometry::{CatmullRom, Parametrization};
use crate::math::Point3;

/// Builds an open interpolating spline through an ordered list of control points.
pub struct BuildCurve {
    points: Vec<Point3>,
    parametrization: Parametrization,
}

impl BuildCurve {
    /// Creates a new `BuildCurve` operation.
    #[must_use]
    pub fn new(points: Vec<Point3>, parametrization: Parametrization) -> Self {
        Self {
            points,
            parametrization,
        }
    }

    /// Executes the operation, returning the raw curve.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCourseDefinition` if fewer than 2 control points were
    /// given or a coordinate is not finite.
    pub fn execute(self) -> Result<CatmullRom> {
        CatmullRom::new(self.points, self.parametrization)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{CourseError, FlumeError};
    use crate::geometry::Curve;
    use approx::assert_relative_eq;

    #[test]
    fn builds_open_curve_through_points() {
        let pts = vec![
            Point3::new(0.0, 100.0, 0.0),
            Point3::new(0.0, 50.0, -100.0),
            Point3::new(0.0, 80.0, -200.0),
        ];
        let curve = BuildCurve::new(pts.clone(), Parametrization::Chordal)
            .execute()
            .unwrap();
        assert!(!curve.is_closed());
        assert_relative_eq!((curve.evaluate(0.0) - pts[0]).norm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!((curve.evaluate(1.0) - pts[2]).norm(), 0.0, epsilon = 1e-9);
        assert_eq!(curve.parametrization(), Parametrization::Chordal);
    }

    #[test]
    fn empty_input_is_invalid_course() {
        let err = BuildCurve::new(Vec::new(), Parametrization::Uniform)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            FlumeError::Course(CourseError::InvalidCourseDefinition(_))
        ));
    }
}
