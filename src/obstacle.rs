pub use self::factory::create_obstacles;
pub use self::set::ObstacleSet;
use crate::config::ObstacleConfig;
use crate::debug::debug_box;
use crate::decision::ObjectDecision;
use crate::error::ObstacleError;
use crate::math::Box2d;
use crate::perception::PerceptionObstacle;
use crate::trajectory::{Trajectory, TrajectoryPoint};
use smallvec::SmallVec;

mod factory;
mod set;

/// The decisions attached to an obstacle.
pub type DecisionList = SmallVec<[ObjectDecision; 2]>;

/// A perceived object paired with one of its predicted trajectories,
/// as seen by the planner for the duration of a single planning cycle.
#[derive(Clone, Debug)]
pub struct Obstacle {
    /// The obstacle's ID, unique within its [ObstacleSet].
    id: String,
    /// Whether the obstacle is treated as stationary.
    is_static: bool,
    /// The object as observed at the start of the cycle.
    perception: PerceptionObstacle,
    /// The predicted trajectory, which may be empty.
    trajectory: Trajectory,
    /// The footprint of the object at the time of perception.
    perception_bounding_box: Box2d,
    /// Decisions attached by downstream planning logic.
    decisions: DecisionList,
}

impl Obstacle {
    /// Creates a new obstacle.
    ///
    /// # Parameters
    /// * `id` - The obstacle ID; must not be empty
    /// * `perception` - The perceived state of the object
    /// * `trajectory` - The predicted trajectory, with strictly increasing timestamps
    /// * `config` - Determines which object types are static
    pub fn new(
        id: impl Into<String>,
        perception: PerceptionObstacle,
        trajectory: Trajectory,
        config: &ObstacleConfig,
    ) -> Result<Self, ObstacleError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ObstacleError::EmptyId);
        }
        if !perception.has_valid_dimensions() {
            return Err(ObstacleError::InvalidDimensions { id });
        }
        trajectory.validate(&id)?;

        let perception_bounding_box = Box2d::new(
            perception.position,
            perception.theta,
            perception.length,
            perception.width,
        );
        debug_box(&id, &perception_bounding_box);

        Ok(Self {
            id,
            is_static: config.is_static_type(perception.obstacle_type),
            perception,
            trajectory,
            perception_bounding_box,
            decisions: DecisionList::new(),
        })
    }

    /// Gets the obstacle's ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The ID of the perceived object this obstacle was built from.
    /// Shared by every hypothesis of the same object.
    pub fn perception_id(&self) -> i32 {
        self.perception.id
    }

    /// Whether the obstacle is stationary. Fixed at construction.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Whether the obstacle has a predicted trajectory.
    pub fn has_trajectory(&self) -> bool {
        !self.trajectory.is_empty()
    }

    /// The perceived speed of the object in m/s.
    pub fn speed(&self) -> f64 {
        self.perception.speed()
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn perception(&self) -> &PerceptionObstacle {
        &self.perception
    }

    /// The obstacle's footprint at the time of perception.
    pub fn perception_bounding_box(&self) -> &Box2d {
        &self.perception_bounding_box
    }

    /// Estimates the obstacle's state at the given relative time.
    ///
    /// Times outside the predicted horizon are clamped to its first or last point.
    /// An obstacle without a trajectory stays frozen at its perceived pose,
    /// stamped with the query time, or zero if that is not finite.
    pub fn point_at_time(&self, time: f64) -> TrajectoryPoint {
        if !time.is_finite() {
            log::warn!("Obstacle {} queried at non-finite time {}", self.id, time);
        }
        self.trajectory.point_at_time(time).unwrap_or_else(|| {
            let time = if time.is_finite() { time } else { 0.0 };
            TrajectoryPoint::stationary(self.perception.position, self.perception.theta, time)
        })
    }

    /// The obstacle's footprint if it were at the given point.
    pub fn bounding_box(&self, point: &TrajectoryPoint) -> Box2d {
        Box2d::new(
            point.position,
            point.theta,
            self.perception.length,
            self.perception.width,
        )
    }

    /// The obstacle's footprint at the given relative time.
    pub fn bounding_box_at_time(&self, time: f64) -> Box2d {
        self.bounding_box(&self.point_at_time(time))
    }

    pub fn decisions(&self) -> &[ObjectDecision] {
        &self.decisions
    }

    pub fn decisions_mut(&mut self) -> &mut DecisionList {
        &mut self.decisions
    }

    /// Attaches another decision to the obstacle.
    pub fn add_decision(&mut self, decision: ObjectDecision) {
        self.decisions.push(decision);
    }
}
