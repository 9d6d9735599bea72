use crate::error::ObstacleError;
use crate::math::{lerp, lerp_angle, Point2d};
use crate::util::Interval;
use cgmath::{EuclideanSpace, VectorSpace};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A timestamped pose and motion sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Time relative to the start of the planning cycle, in s.
    pub relative_time: f64,
    /// The world space coordinates of the object's centre.
    pub position: Point2d,
    /// The heading in radians.
    pub theta: f64,
    /// The distance travelled along the trajectory in m.
    #[serde(default)]
    pub s: f64,
    /// The path curvature in 1/m.
    #[serde(default)]
    pub kappa: f64,
    /// The velocity in m/s.
    #[serde(default)]
    pub v: f64,
    /// The acceleration in m/s^2.
    #[serde(default)]
    pub a: f64,
}

/// One predicted future path of an object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// The likelihood assigned upstream. Not interpreted here.
    #[serde(default)]
    pub probability: f64,
    /// The samples, ordered by `relative_time`.
    pub points: Vec<TrajectoryPoint>,
}

impl TrajectoryPoint {
    /// A point at rest at the given pose.
    pub fn stationary(position: Point2d, theta: f64, relative_time: f64) -> Self {
        Self {
            relative_time,
            position,
            theta,
            s: 0.0,
            kappa: 0.0,
            v: 0.0,
            a: 0.0,
        }
    }
}

impl Trajectory {
    /// Creates a new trajectory.
    pub fn new(probability: f64, points: Vec<TrajectoryPoint>) -> Self {
        Self {
            probability,
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The span of time covered by the trajectory.
    pub fn horizon(&self) -> Option<Interval<f64>> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some(Interval::new(first.relative_time, last.relative_time))
    }

    /// Checks that every timestamp is finite and strictly increasing.
    ///
    /// # Parameters
    /// * `id` - The obstacle ID to report in the error
    pub fn validate(&self, id: &str) -> Result<(), ObstacleError> {
        if let Some(index) = self
            .points
            .iter()
            .position(|p| !p.relative_time.is_finite())
        {
            return Err(ObstacleError::NonFiniteTime {
                id: id.to_owned(),
                index,
            });
        }
        if let Some(index) = self
            .points
            .iter()
            .tuple_windows()
            .position(|(a, b)| b.relative_time <= a.relative_time)
        {
            return Err(ObstacleError::UnsortedTrajectory {
                id: id.to_owned(),
                index: index + 1,
            });
        }
        Ok(())
    }

    /// Samples the trajectory at `time`, clamping to the first and last points.
    /// Returns `None` only if the trajectory is empty.
    pub fn point_at_time(&self, time: f64) -> Option<TrajectoryPoint> {
        let points = &self.points;
        if points.is_empty() {
            return None;
        }
        let idx = points.partition_point(|p| p.relative_time < time);
        match points.get(idx) {
            None => points.last().copied(),
            Some(upper) if idx == 0 || upper.relative_time == time => Some(*upper),
            Some(upper) => Some(interpolate(&points[idx - 1], upper, time)),
        }
    }
}

/// Linearly interpolates between two trajectory points, with the heading
/// following the shorter arc.
///
/// # Parameters
/// * `p0` - The earlier point
/// * `p1` - The later point, strictly after `p0`
/// * `time` - The relative time to sample, between the two points
pub fn interpolate(p0: &TrajectoryPoint, p1: &TrajectoryPoint, time: f64) -> TrajectoryPoint {
    let r = (time - p0.relative_time) / (p1.relative_time - p0.relative_time);
    TrajectoryPoint {
        relative_time: time,
        position: Point2d::from_vec(p0.position.to_vec().lerp(p1.position.to_vec(), r)),
        theta: lerp_angle(p0.theta, p1.theta, r),
        s: lerp(p0.s, p1.s, r),
        kappa: lerp(p0.kappa, p1.kappa, r),
        v: lerp(p0.v, p1.v, r),
        a: lerp(p0.a, p1.a, r),
    }
}
