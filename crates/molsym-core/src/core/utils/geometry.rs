use nalgebra::{Point3, Rotation3, Unit, Vector3};

/// Below this length a direction vector is treated as degenerate.
pub const MIN_DIRECTION_NORM: f64 = 1e-12;

pub fn try_unit(v: &Vector3<f64>) -> Option<Unit<Vector3<f64>>> {
    if !v.iter().all(|c| c.is_finite()) {
        return None;
    }
    Unit::try_new(*v, MIN_DIRECTION_NORM)
}

pub fn rotation_from_axis_angle(axis: &Unit<Vector3<f64>>, angle_radians: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(axis, angle_radians)
}

/// Reflects `p` across the plane through the origin with unit normal `n`:
/// `p' = p - 2(p·n)n`.
pub fn reflect_across_plane(p: &Point3<f64>, n: &Unit<Vector3<f64>>) -> Point3<f64> {
    let n = n.as_ref();
    p - n * (2.0 * p.coords.dot(n))
}

/// Point reflection through `center`: `p' = 2c - p`.
pub fn invert_through(p: &Point3<f64>, center: &Point3<f64>) -> Point3<f64> {
    Point3::from(center.coords * 2.0 - p.coords)
}

/// Linear interpolation written as `(1-t)·a + t·b` so that `t = 0` and
/// `t = 1` reproduce the endpoints exactly.
pub fn lerp_point(a: &Point3<f64>, b: &Point3<f64>, t: f64) -> Point3<f64> {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}

pub fn nearest_distance(p: &Point3<f64>, candidates: &[Point3<f64>]) -> Option<f64> {
    candidates
        .iter()
        .map(|c| (p - c).norm())
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// `true` if the two directions are parallel or anti-parallel within
/// `angle_tolerance` radians.
pub fn are_parallel(a: &Vector3<f64>, b: &Vector3<f64>, angle_tolerance: f64) -> bool {
    match (try_unit(a), try_unit(b)) {
        (Some(a), Some(b)) => a.cross(&b).norm() <= angle_tolerance.sin().abs(),
        _ => false,
    }
}

pub fn are_perpendicular(a: &Vector3<f64>, b: &Vector3<f64>, angle_tolerance: f64) -> bool {
    match (try_unit(a), try_unit(b)) {
        (Some(a), Some(b)) => a.dot(&b).abs() <= angle_tolerance.sin().abs(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPS: f64 = 1e-12;

    #[test]
    fn try_unit_rejects_zero_and_non_finite_vectors() {
        assert!(try_unit(&Vector3::zeros()).is_none());
        assert!(try_unit(&Vector3::new(f64::NAN, 0.0, 1.0)).is_none());
        assert!(try_unit(&Vector3::new(f64::INFINITY, 0.0, 0.0)).is_none());
        let u = try_unit(&Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert!((u.norm() - 1.0).abs() < EPS);
    }

    #[test]
    fn rotation_about_z_by_quarter_turn_maps_x_to_y() {
        let axis = Vector3::z_axis();
        let rot = rotation_from_axis_angle(&axis, FRAC_PI_2);
        let p = rot * Point3::new(1.0, 0.0, 0.0);
        assert!((p - Point3::new(0.0, 1.0, 0.0)).norm() < EPS);
    }

    #[test]
    fn reflect_across_plane_flips_normal_component_only() {
        let n = Unit::new_normalize(Vector3::new(1.0, 1.0, 0.0));
        let p = Point3::new(1.0, 0.0, 2.0);
        let r = reflect_across_plane(&p, &n);
        assert!((r - Point3::new(0.0, -1.0, 2.0)).norm() < EPS);
    }

    #[test]
    fn invert_through_non_origin_center() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let c = Point3::new(1.0, 1.0, 1.0);
        assert_eq!(invert_through(&p, &c), Point3::new(1.0, 0.0, -1.0));
    }

    #[test]
    fn lerp_point_reproduces_endpoints_exactly() {
        let a = Point3::new(0.1, 0.2, 0.3);
        let b = Point3::new(-0.7, 1.9, 3.3);
        assert_eq!(lerp_point(&a, &b, 0.0), a);
        assert_eq!(lerp_point(&a, &b, 1.0), b);
        let mid = lerp_point(&a, &b, 0.5);
        assert!((mid - Point3::new(-0.3, 1.05, 1.8)).norm() < EPS);
    }

    #[test]
    fn nearest_distance_picks_closest_candidate() {
        let candidates = [Point3::new(5.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let d = nearest_distance(&Point3::origin(), &candidates).unwrap();
        assert!((d - 1.0).abs() < EPS);
        assert!(nearest_distance(&Point3::origin(), &[]).is_none());
    }

    #[test]
    fn parallel_and_perpendicular_checks() {
        let z = Vector3::new(0.0, 0.0, 2.0);
        assert!(are_parallel(&z, &Vector3::new(0.0, 0.0, -1.0), 1e-6));
        assert!(!are_parallel(&z, &Vector3::x(), 1e-6));
        assert!(are_perpendicular(&z, &Vector3::new(1.0, 1.0, 0.0), 1e-6));
        assert!(!are_perpendicular(&z, &Vector3::new(1.0, 0.0, 1.0), 1e-6));
        assert!(!are_parallel(&Vector3::zeros(), &z, 1e-6));
    }
}
