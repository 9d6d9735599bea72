use super::{Point2d, Vector2d};
use cgmath::prelude::*;
use std::f64::consts::PI;

/// Projects a point onto a local coordinate system.
///
/// # Parameters
/// * `point` - The point to project
/// * `origin` - The origin of the coordinate system
/// * `x_axis` - The basis vector pointing in the positive x-axis.
/// * `y_axis` - The basis vector pointing in the positive y-axis.
pub fn project_local(
    point: Point2d,
    origin: Point2d,
    x_axis: Vector2d,
    y_axis: Vector2d,
) -> Point2d {
    let point = point - origin;
    Point2d::new(point.dot(x_axis), point.dot(y_axis))
}

/// Rotates a vector 90 degrees counter-clockwise.
pub fn rot90(vec: Vector2d) -> Vector2d {
    Vector2d::new(-vec.y, vec.x)
}

/// The unit vector pointing along the heading `theta`, in radians.
pub fn heading_vector(theta: f64) -> Vector2d {
    let (sin, cos) = theta.sin_cos();
    Vector2d::new(cos, sin)
}

/// Wraps an angle into the range [-pi, pi).
pub fn normalize_angle(angle: f64) -> f64 {
    let a = (angle + PI).rem_euclid(2.0 * PI);
    a - PI
}

/// Interpolates between two headings along the shorter arc.
///
/// # Parameters
/// * `a0` - The heading at `r = 0`, in radians
/// * `a1` - The heading at `r = 1`, in radians
/// * `r` - The interpolation ratio
pub fn lerp_angle(a0: f64, a1: f64, r: f64) -> f64 {
    let a0 = normalize_angle(a0);
    let delta = normalize_angle(normalize_angle(a1) - a0);
    normalize_angle(a0 + r * delta)
}

/// Linearly interpolates between two scalars.
#[inline(always)]
pub fn lerp(x0: f64, x1: f64, r: f64) -> f64 {
    x0 + r * (x1 - x0)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn normalize() {
        assert_approx_eq!(normalize_angle(0.5), 0.5);
        assert_approx_eq!(normalize_angle(2.0 * PI + 0.5), 0.5);
        assert_approx_eq!(normalize_angle(-2.0 * PI - 0.5), -0.5);
        assert_approx_eq!(normalize_angle(PI), -PI);
    }

    #[test]
    fn angle_takes_short_way_round() {
        // From just below +pi to just above -pi crosses the seam, not zero
        let a = lerp_angle(PI - 0.1, -PI + 0.1, 0.5);
        assert_approx_eq!(a.abs(), PI);
        assert_approx_eq!(lerp_angle(0.2, -0.2, 0.5), 0.0);
        assert_approx_eq!(lerp_angle(0.0, 1.0, 0.25), 0.25);
    }

    #[test]
    fn local_projection() {
        let dir = heading_vector(0.5 * PI);
        let p = project_local(Point2d::new(1.0, 3.0), Point2d::new(1.0, 1.0), dir, rot90(dir));
        assert_approx_eq!(p.x, 2.0);
        assert_approx_eq!(p.y, 0.0);
    }
}
