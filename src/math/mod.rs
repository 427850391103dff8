/// 3D point type. `y` is elevation.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Clamps a normalized parameter into `[0, 1]`.
///
/// NaN maps to `0.0` so a poisoned caller value still lands on the curve.
#[must_use]
pub fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Distance between two points projected onto the horizontal (x, z) plane.
#[must_use]
pub fn horizontal_distance(a: &Point3, b: &Point3) -> f64 {
    (b.x - a.x).hypot(b.z - a.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_unit_bounds() {
        assert_relative_eq!(clamp_unit(-0.25), 0.0);
        assert_relative_eq!(clamp_unit(0.4), 0.4);
        assert_relative_eq!(clamp_unit(1.000_001), 1.0);
        assert_relative_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn horizontal_distance_ignores_elevation() {
        let a = Point3::new(0.0, 100.0, 0.0);
        let b = Point3::new(3.0, -50.0, 4.0);
        assert_relative_eq!(horizontal_distance(&a, &b), 5.0);
    }
}
