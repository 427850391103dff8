//! Authored courses and the definitions paths are built from.

mod data;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::{CourseError, Result};
use crate::geometry::Parametrization;
use crate::math::Point3;
use crate::path::{Path, PathConfig};
use crate::zone::Zone;

/// Whether the raw spline is trusted or flattened wherever it climbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescentPolicy {
    /// Waypoints are hand-tuned to descend; the raw spline is used as is.
    HandTuned,
    /// The raw spline is resampled and every ascent is clamped away.
    #[default]
    Enforce,
}

/// Everything needed to build one course's [`Path`].
#[derive(Debug, Clone)]
pub struct CourseDefinition {
    /// Display name, also used in log events.
    pub name: Cow<'static, str>,
    /// Control points in traversal order; `y` is elevation.
    pub waypoints: Vec<Point3>,
    /// Knot spacing of the interpolating spline.
    pub parametrization: Parametrization,
    /// Whether ascents in the raw spline are flattened.
    pub descent: DescentPolicy,
    /// Zone table, ordered by start distance.
    pub zones: Vec<Zone>,
}

impl CourseDefinition {
    /// Creates a definition with uniform parametrization, enforced descent
    /// and no zones.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, waypoints: Vec<Point3>) -> Self {
        Self {
            name: name.into(),
            waypoints,
            parametrization: Parametrization::default(),
            descent: DescentPolicy::default(),
            zones: Vec::new(),
        }
    }

    /// Sets the knot spacing.
    #[must_use]
    pub fn with_parametrization(mut self, parametrization: Parametrization) -> Self {
        self.parametrization = parametrization;
        self
    }

    /// Sets the descent policy.
    #[must_use]
    pub fn with_descent(mut self, descent: DescentPolicy) -> Self {
        self.descent = descent;
        self
    }

    /// Replaces the zone table.
    #[must_use]
    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }
}

/// The authored courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseId {
    /// 2.5 km forest-to-finale run ending in a 128-unit mega drop.
    ExtremeFlume,
    /// Chordal canyon course with authored rises that get flattened.
    CanyonRun,
    /// Short beginner course.
    KiddieCreek,
}

impl CourseId {
    /// Every authored course, in menu order.
    pub const ALL: [Self; 3] = [Self::ExtremeFlume, Self::CanyonRun, Self::KiddieCreek];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ExtremeFlume => "Extreme Log Flume",
            Self::CanyonRun => "Canyon Run",
            Self::KiddieCreek => "Kiddie Creek",
        }
    }

    /// Short identifier accepted by [`FromStr`].
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::ExtremeFlume => "extreme",
            Self::CanyonRun => "canyon",
            Self::KiddieCreek => "kiddie",
        }
    }

    /// The authored definition for this course.
    #[must_use]
    pub fn definition(self) -> CourseDefinition {
        let (waypoints, zones, parametrization, descent) = match self {
            Self::ExtremeFlume => (
                data::EXTREME_FLUME_WAYPOINTS,
                data::EXTREME_FLUME_ZONES,
                Parametrization::Uniform,
                DescentPolicy::Enforce,
            ),
            Self::CanyonRun => (
                data::CANYON_RUN_WAYPOINTS,
                data::CANYON_RUN_ZONES,
                Parametrization::Chordal,
                DescentPolicy::Enforce,
            ),
            Self::KiddieCreek => (
                data::KIDDIE_CREEK_WAYPOINTS,
                data::KIDDIE_CREEK_ZONES,
                Parametrization::Uniform,
                DescentPolicy::Enforce,
            ),
        };
        CourseDefinition::new(
            self.name(),
            waypoints
                .iter()
                .map(|&[x, y, z]| Point3::new(x, y, z))
                .collect(),
        )
        .with_parametrization(parametrization)
        .with_descent(descent)
        .with_zones(zones.to_vec())
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CourseId {
    type Err = CourseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.slug().eq_ignore_ascii_case(s) || id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CourseError::UnknownCourse(s.to_owned()))
    }
}

/// Builds the path for an authored course with the default configuration.
///
/// # Errors
///
/// Returns an error only if the authored data is broken.
pub fn create_path(course: CourseId) -> Result<Path> {
    Path::build(course.definition(), PathConfig::default())
}
