//! Debug overlay for a built path: the curve as a polyline plus a marker on
//! every authored waypoint. Presentation only.

use tracing::debug;

use crate::error::Result;
use crate::math::Point3;
use crate::path::Path;
use crate::tessellation::TessellateCurve;
use crate::zone::Color;

/// A scene the overlay can draw into.
///
/// Implemented by the host renderer; the crate never draws anything itself.
pub trait DebugScene {
    /// Adds a connected line strip.
    fn add_polyline(&mut self, points: &[Point3], color: Color);

    /// Adds a small sphere marker.
    fn add_marker(&mut self, position: Point3, radius: f64, color: Color);
}

/// Emits the debug overlay for a path into a [`DebugScene`].
#[derive(Debug, Clone, Copy)]
pub struct DebugVisualization {
    segments: usize,
    line_color: Color,
    marker_color: Color,
    marker_radius: f64,
}

impl Default for DebugVisualization {
    fn default() -> Self {
        Self {
            segments: 500,
            line_color: Color::from_hex(0xff00ff),
            marker_color: Color::from_hex(0x00ff00),
            marker_radius: 2.0,
        }
    }
}

impl DebugVisualization {
    /// Creates the overlay with the default magenta line and green markers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of polyline segments.
    #[must_use]
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Overrides the marker radius.
    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Draws `path` into `scene`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment count is zero.
    pub fn execute<S: DebugScene + ?Sized>(&self, path: &Path, scene: &mut S) -> Result<()> {
        let polyline = TessellateCurve::new(self.segments).execute(path.curve())?;
        scene.add_polyline(&polyline.points, self.line_color);
        for waypoint in path.waypoints() {
            scene.add_marker(*waypoint, self.marker_radius, self.marker_color);
        }
        debug!(
            course = path.name(),
            vertices = polyline.points.len(),
            markers = path.waypoints().len(),
            "debug visualization attached"
        );
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::course::{create_path, CourseId};

    #[derive(Default)]
    struct RecordingScene {
        polylines: Vec<(usize, Color)>,
        markers: Vec<(Point3, f64, Color)>,
    }

    impl DebugScene for RecordingScene {
        fn add_polyline(&mut self, points: &[Point3], color: Color) {
            self.polylines.push((points.len(), color));
        }

        fn add_marker(&mut self, position: Point3, radius: f64, color: Color) {
            self.markers.push((position, radius, color));
        }
    }

    #[test]
    fn draws_curve_and_every_waypoint() {
        let path = create_path(CourseId::KiddieCreek).unwrap();
        let mut scene = RecordingScene::default();
        DebugVisualization::new().execute(&path, &mut scene).unwrap();

        assert_eq!(scene.polylines, vec![(501, Color::from_hex(0xff00ff))]);
        assert_eq!(scene.markers.len(), path.waypoints().len());
        assert_eq!(scene.markers[0].0, path.waypoints()[0]);
        assert!(scene
            .markers
            .iter()
            .all(|&(_, r, c)| (r - 2.0).abs() < f64::EPSILON && c == Color::from_hex(0x00ff00)));
    }

    #[test]
    fn custom_segments_and_radius() {
        let path = create_path(CourseId::KiddieCreek).unwrap();
        let mut scene = RecordingScene::default();
        DebugVisualization::new()
            .with_segments(10)
            .with_marker_radius(0.5)
            .execute(&path, &mut scene)
            .unwrap();
        assert_eq!(scene.polylines[0].0, 11);
        assert!((scene.markers[0].1 - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_segments_fails() {
        let path = create_path(CourseId::KiddieCreek).unwrap();
        let mut scene = RecordingScene::default();
        assert!(DebugVisualization::new()
            .with_segments(0)
            .execute(&path, &mut scene)
            .is_err());
        assert!(scene.markers.is_empty());
    }
}
