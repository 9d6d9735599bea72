use crate::math::{Point2d, Vector2d};
use cgmath::InnerSpace;
use serde::{Deserialize, Serialize};

/// The category perception assigned to an object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObstacleType {
    Unknown,
    UnknownMovable,
    UnknownUnmovable,
    Pedestrian,
    Bicycle,
    Vehicle,
}

/// An object as observed by perception at the start of the planning cycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerceptionObstacle {
    /// The perception track ID.
    pub id: i32,
    /// The object category.
    pub obstacle_type: ObstacleType,
    /// The world space coordinates of the centre of the object.
    pub position: Point2d,
    /// The heading of the object in radians.
    pub theta: f64,
    /// The velocity of the object in m/s.
    pub velocity: Vector2d,
    /// The object length in m.
    pub length: f64,
    /// The object width in m.
    pub width: f64,
    /// The object height in m.
    #[serde(default)]
    pub height: f64,
    /// The time of the observation in s.
    #[serde(default)]
    pub timestamp: f64,
}

impl PerceptionObstacle {
    /// The object's speed in m/s.
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Whether the length and width describe a real footprint.
    pub(crate) fn has_valid_dimensions(&self) -> bool {
        let valid = |x: f64| x.is_finite() && x >= 0.0;
        valid(self.length) && valid(self.width)
    }
}
