use crate::error::{GeometryError, Result};
use crate::geometry::ArcLengthCurve;

use super::Polyline;

/// Default segment count for ride-curve polylines.
pub const DEFAULT_SEGMENTS: usize = 500;

/// Tessellates a ride curve into a polyline with vertices evenly spaced by
/// arc length.
pub struct TessellateCurve {
    segments: usize,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation producing `segments + 1` vertices.
    #[must_use]
    pub fn new(segments: usize) -> Self {
        Self { segments }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment count is zero.
    pub fn execute(&self, curve: &ArcLengthCurve) -> Result<Polyline> {
        if self.segments == 0 {
            return Err(GeometryError::InvalidParameters(
                "tessellation needs at least one segment".into(),
            )
            .into());
        }
        let points = (0..=self.segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let u = i as f64 / self.segments as f64;
                curve.point_at(u)
            })
            .collect();
        Ok(Polyline { points })
    }
}

impl Default for TessellateCurve {
    fn default() -> Self {
        Self::new(DEFAULT_SEGMENTS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CatmullRom, Parametrization};
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn bend() -> ArcLengthCurve {
        let curve = CatmullRom::new(
            vec![
                Point3::new(0.0, 20.0, 0.0),
                Point3::new(15.0, 15.0, -40.0),
                Point3::new(0.0, 5.0, -80.0),
            ],
            Parametrization::Chordal,
        )
        .unwrap();
        ArcLengthCurve::new(curve, 2000).unwrap()
    }

    #[test]
    fn endpoints_and_vertex_count() {
        let curve = bend();
        let polyline = TessellateCurve::new(64).execute(&curve).unwrap();
        assert_eq!(polyline.points.len(), 65);
        assert_eq!(polyline.points[0], curve.point_at(0.0));
        assert_eq!(polyline.points[64], curve.point_at(1.0));
    }

    #[test]
    fn dense_polyline_approaches_curve_length() {
        let curve = bend();
        let polyline = TessellateCurve::default().execute(&curve).unwrap();
        assert_relative_eq!(polyline.length(), curve.length(), max_relative = 1e-3);
    }

    #[test]
    fn zero_segments_rejected() {
        assert!(TessellateCurve::new(0).execute(&bend()).is_err());
    }
}
