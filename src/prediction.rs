use crate::perception::PerceptionObstacle;
use crate::trajectory::Trajectory;
use serde::{Deserialize, Serialize};

/// The predicted futures of a single perceived object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionObstacle {
    /// The object as perceived at the start of the cycle.
    pub perception: PerceptionObstacle,
    /// Candidate future paths, possibly none.
    #[serde(default)]
    pub trajectories: Vec<Trajectory>,
    /// The span of time covered by the prediction, in s.
    #[serde(default)]
    pub predicted_period: f64,
}

/// One batch of predictions for a planning cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionObstacles {
    #[serde(default)]
    pub obstacles: Vec<PredictionObstacle>,
    /// The time the prediction was made, in s.
    #[serde(default)]
    pub start_timestamp: f64,
}
