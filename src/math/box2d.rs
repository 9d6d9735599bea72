use super::{heading_vector, project_local, rot90, Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;
use serde::{Deserialize, Serialize};

/// A rectangle oriented along a heading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Box2d {
    /// The centre of the rectangle.
    center: Point2d,
    /// The heading of the long axis, in radians.
    heading: f64,
    /// Half the extent along the heading.
    half_length: f64,
    /// Half the extent perpendicular to the heading.
    half_width: f64,
    /// Unit vector along the heading.
    dir: Vector2d,
}

impl Box2d {
    /// Creates a new box.
    ///
    /// # Parameters
    /// * `center` - The centre of the box
    /// * `heading` - The direction of the `length` axis, in radians
    /// * `length` - The extent along the heading
    /// * `width` - The extent perpendicular to the heading
    pub fn new(center: Point2d, heading: f64, length: f64, width: f64) -> Self {
        Self {
            center,
            heading,
            half_length: 0.5 * length,
            half_width: 0.5 * width,
            dir: heading_vector(heading),
        }
    }

    pub fn center(&self) -> Point2d {
        self.center
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn length(&self) -> f64 {
        2.0 * self.half_length
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn area(&self) -> f64 {
        self.length() * self.width()
    }

    /// The four corners of the box in counter-clockwise order,
    /// starting at the front right.
    pub fn corners(&self) -> [Point2d; 4] {
        let lon = self.half_length * self.dir;
        let lat = self.half_width * rot90(self.dir);
        [
            self.center + lon - lat,
            self.center + lon + lat,
            self.center - lon + lat,
            self.center - lon - lat,
        ]
    }

    /// Returns a copy of the box grown by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            half_length: self.half_length + margin,
            half_width: self.half_width + margin,
            ..*self
        }
    }

    /// Returns true if the point lies inside the box or on its boundary.
    pub fn contains_point(&self, point: Point2d) -> bool {
        const EPSILON: f64 = 1e-9;
        let local = self.to_local(point);
        local.x.abs() <= self.half_length + EPSILON && local.y.abs() <= self.half_width + EPSILON
    }

    /// Computes the distance from the box to a point, which is zero
    /// if the point is within the box.
    pub fn distance_to_point(&self, point: Point2d) -> f64 {
        let local = self.to_local(point);
        let dx = f64::max(local.x.abs() - self.half_length, 0.0);
        let dy = f64::max(local.y.abs() - self.half_width, 0.0);
        dx.hypot(dy)
    }

    /// Returns true if the interiors of the two boxes intersect.
    /// Boxes which only share an edge or corner do not overlap.
    pub fn has_overlap(&self, other: &Box2d) -> bool {
        let corners = [self.corners(), other.corners()];
        [self.dir, rot90(self.dir), other.dir, rot90(other.dir)]
            .into_iter()
            .all(|axis| {
                let [a, b] = corners.map(|cs| project_onto(&cs, axis));
                a.overlaps(&b)
            })
    }

    /// Expresses a point in the box's own frame, with x along the heading.
    fn to_local(&self, point: Point2d) -> Point2d {
        project_local(point, self.center, self.dir, rot90(self.dir))
    }
}

/// Projects a set of points onto an axis, returning the extents of the shadow.
fn project_onto(points: &[Point2d; 4], axis: Vector2d) -> Interval<f64> {
    let shadow = points.iter().map(|p| p.to_vec().dot(axis));
    // A fixed-size, non-empty array always has a projection
    Interval::from_values(shadow).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn corners_follow_heading() {
        let b = Box2d::new(Point2d::new(1.0, 1.0), FRAC_PI_2, 4.0, 2.0);
        let [fr, fl, rl, rr] = b.corners();
        assert_approx_eq!(fr.x, 2.0);
        assert_approx_eq!(fr.y, 3.0);
        assert_approx_eq!(fl.x, 0.0);
        assert_approx_eq!(fl.y, 3.0);
        assert_approx_eq!(rl.x, 0.0);
        assert_approx_eq!(rl.y, -1.0);
        assert_approx_eq!(rr.x, 2.0);
        assert_approx_eq!(rr.y, -1.0);
        assert_approx_eq!(b.area(), 8.0);
    }

    #[test]
    fn contains_and_distance() {
        let b = Box2d::new(Point2d::new(0.0, 0.0), 0.0, 4.0, 2.0);
        assert!(b.contains_point(Point2d::new(2.0, 1.0)));
        assert!(b.contains_point(Point2d::new(-1.5, 0.5)));
        assert!(!b.contains_point(Point2d::new(2.1, 0.0)));
        assert_approx_eq!(b.distance_to_point(Point2d::new(0.5, 0.5)), 0.0);
        assert_approx_eq!(b.distance_to_point(Point2d::new(5.0, 5.0)), 5.0);
        assert_approx_eq!(b.expanded(1.0).distance_to_point(Point2d::new(3.0, 0.0)), 0.0);
    }

    #[test]
    fn overlap_with_rotated_box() {
        let a = Box2d::new(Point2d::new(0.0, 0.0), 0.0, 4.0, 2.0);
        let b = Box2d::new(Point2d::new(2.5, 0.0), FRAC_PI_2 * 0.5, 2.0, 2.0);
        let c = Box2d::new(Point2d::new(5.0, 0.0), FRAC_PI_2 * 0.5, 2.0, 2.0);
        assert!(a.has_overlap(&b));
        assert!(b.has_overlap(&a));
        assert!(!a.has_overlap(&c));
    }

    #[test]
    fn touching_boxes_do_not_overlap() {
        let a = Box2d::new(Point2d::new(0.0, 0.0), 0.0, 2.0, 2.0);
        let b = Box2d::new(Point2d::new(2.0, 0.0), 0.0, 2.0, 2.0);
        assert!(!a.has_overlap(&b));
    }
}
