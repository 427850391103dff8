mod config;

pub use config::PathConfig;

use tracing::{info, warn};

use crate::course::{CourseDefinition, DescentPolicy};
use crate::error::Result;
use crate::geometry::ArcLengthCurve;
use crate::math::{clamp_unit, Point3, Vector3};
use crate::operations::creation::BuildCurve;
use crate::operations::descent::{DescentReport, EnforceDescent};
use crate::operations::query::{Banking, Curvature, Slope, SpeedBand, SpeedMultiplier};
use crate::zone::{Zone, ZoneTable};

/// A constructed ride path: the final curve, its length, and its zones.
///
/// Immutable once built. All queries take a normalized arc-length parameter
/// `t`, clamp it into `[0, 1]`, and cannot fail.
#[derive(Debug, Clone)]
pub struct Path {
    name: String,
    waypoints: Vec<Point3>,
    curve: ArcLengthCurve,
    zones: ZoneTable,
    config: PathConfig,
    descent: Option<DescentReport>,
}

impl Path {
    /// Builds a path from a course definition.
    ///
    /// Runs the raw spline through descent enforcement when the course asks
    /// for it, then measures the final curve.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCourseDefinition` for fewer than two or non-finite
    /// waypoints, `EmptyZoneTable` for a course without zones, and a geometry
    /// error for invalid `config` or a curve of zero length.
    pub fn build(definition: CourseDefinition, config: PathConfig) -> Result<Self> {
        config.validate()?;
        let CourseDefinition {
            name,
            waypoints,
            parametrization,
            descent,
            zones,
        } = definition;

        let zones = ZoneTable::new(&name, zones)?;
        let raw = BuildCurve::new(waypoints.clone(), parametrization).execute()?;

        let (final_curve, report) = match descent {
            DescentPolicy::HandTuned => (raw, None),
            DescentPolicy::Enforce => {
                let (curve, report) = EnforceDescent::new(config.descent_samples).execute(&raw)?;
                (curve, Some(report))
            }
        };
        let curve = ArcLengthCurve::new(final_curve, config.arc_length_divisions)?;

        let total_length = curve.length();
        if zones.authored_end() < total_length {
            warn!(
                course = %name,
                authored_end = zones.authored_end(),
                total_length,
                "zone table ends before the course; final zone covers the rest"
            );
        }
        info!(
            course = %name,
            waypoints = waypoints.len(),
            total_length,
            enforced = report.is_some(),
            "course built"
        );

        Ok(Self {
            name: name.into_owned(),
            waypoints,
            curve,
            zones,
            config,
            descent: report,
        })
    }

    /// Course name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The authored control points, before any descent clamping.
    #[must_use]
    pub fn waypoints(&self) -> &[Point3] {
        &self.waypoints
    }

    /// The final arc-length parametrized curve.
    #[must_use]
    pub fn curve(&self) -> &ArcLengthCurve {
        &self.curve
    }

    /// Arc length of the final curve.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.curve.length()
    }

    /// The course's zone table.
    #[must_use]
    pub fn zones(&self) -> &ZoneTable {
        &self.zones
    }

    /// Configuration the path was built with.
    #[must_use]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Descent-enforcement diagnostics; `None` for hand-tuned courses.
    #[must_use]
    pub fn descent_report(&self) -> Option<DescentReport> {
        self.descent
    }

    /// Position after traveling fraction `t` of the course.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.curve.point_at(t)
    }

    /// Unit direction of travel at `t`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        self.curve.tangent_at(t)
    }

    /// Converts a traveled distance into `t`. Distance is clamped to the course.
    #[must_use]
    pub fn distance_to_t(&self, distance: f64) -> f64 {
        let total = self.total_length();
        if distance.is_nan() {
            return 0.0;
        }
        distance.clamp(0.0, total) / total
    }

    /// Converts `t` into traveled distance.
    #[must_use]
    pub fn t_to_distance(&self, t: f64) -> f64 {
        clamp_unit(t) * self.total_length()
    }

    /// Arc-length parameter at which waypoint `index` is reached, or `None`
    /// if there is no such waypoint.
    ///
    /// On an enforced course the point there lies at or below the waypoint's
    /// elevation and near its horizontal position. It is exact when
    /// `descent_samples` is a multiple of the span count.
    #[must_use]
    pub fn waypoint_t(&self, index: usize) -> Option<f64> {
        if index >= self.waypoints.len() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let raw_t = index as f64 / (self.waypoints.len() - 1) as f64;
        Some(self.curve.t_to_u(raw_t))
    }

    /// The zone governing `distance`. Negative distances read as the start;
    /// anything past the authored zones reads as the final zone.
    #[must_use]
    pub fn zone_at(&self, distance: f64) -> &Zone {
        self.zones.zone_at(distance.max(0.0))
    }

    /// Grade at `t` using the configured window.
    #[must_use]
    pub fn slope_at(&self, t: f64) -> f64 {
        self.slope_at_with_delta(t, self.config.delta)
    }

    /// Grade at `t` using an explicit window.
    #[must_use]
    pub fn slope_at_with_delta(&self, t: f64, delta: f64) -> f64 {
        Slope::new(t).with_delta(delta).execute(&self.curve)
    }

    /// Speed band at `t`.
    #[must_use]
    pub fn speed_band_at(&self, t: f64) -> SpeedBand {
        SpeedMultiplier::new(t)
            .with_delta(self.config.delta)
            .band(&self.curve)
    }

    /// Speed multiplier at `t`.
    #[must_use]
    pub fn speed_multiplier_at(&self, t: f64) -> f64 {
        self.speed_band_at(t).multiplier()
    }

    /// Banking proxy at `t` using the configured window.
    #[must_use]
    pub fn banking_at(&self, t: f64) -> f64 {
        self.banking_at_with_delta(t, self.config.delta)
    }

    /// Banking proxy at `t` using an explicit window.
    #[must_use]
    pub fn banking_at_with_delta(&self, t: f64, delta: f64) -> f64 {
        Banking::new(t)
            .with_delta(delta)
            .with_scale(self.config.banking_scale)
            .execute(&self.curve)
    }

    /// Curvature proxy at `t`.
    #[must_use]
    pub fn curvature_at(&self, t: f64) -> f64 {
        Curvature::new(t)
            .with_delta(self.config.delta)
            .with_scale(self.config.curvature_scale)
            .execute(&self.curve)
    }
}
