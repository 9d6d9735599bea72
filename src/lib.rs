pub use cgmath;
pub use config::ObstacleConfig;
#[cfg(feature = "debug")]
pub use debug::take_debug_frame;
pub use decision::ObjectDecision;
pub use error::ObstacleError;
pub use obstacle::{create_obstacles, DecisionList, Obstacle, ObstacleSet};
pub use perception::{ObstacleType, PerceptionObstacle};
pub use prediction::{PredictionObstacle, PredictionObstacles};
use slotmap::new_key_type;
pub use slotmap::{Key, KeyData};
pub use trajectory::{interpolate, Trajectory, TrajectoryPoint};
pub use util::Interval;

mod config;
mod debug;
mod decision;
mod error;
pub mod math;
mod obstacle;
mod perception;
mod prediction;
mod trajectory;
mod util;

new_key_type! {
    /// Unique key of an [Obstacle] within an [ObstacleSet].
    pub struct ObstacleKey;
}
