use super::{Obstacle, ObstacleSet};
use crate::config::ObstacleConfig;
use crate::error::ObstacleError;
use crate::prediction::{PredictionObstacle, PredictionObstacles};
use crate::trajectory::Trajectory;
use smallvec::{smallvec, SmallVec};

/// Creates one obstacle for each predicted trajectory of each object.
///
/// Each trajectory of object `id` becomes an obstacle with ID `"{id}_{i}"`,
/// where `i` is the trajectory's index. An object without any trajectories
/// becomes a single obstacle with ID `"{id}"` and an empty trajectory.
///
/// # Parameters
/// * `predictions` - The prediction results for this planning cycle
/// * `config` - Determines which object types are static
pub fn create_obstacles(
    predictions: &PredictionObstacles,
    config: &ObstacleConfig,
) -> Result<ObstacleSet, ObstacleError> {
    let capacity = predictions
        .obstacles
        .iter()
        .map(|p| usize::max(p.trajectories.len(), 1))
        .sum();
    let mut obstacles = ObstacleSet::with_capacity(capacity);

    for prediction in &predictions.obstacles {
        for (id, trajectory) in hypotheses(prediction) {
            let obstacle = Obstacle::new(id, prediction.perception.clone(), trajectory, config)
                .and_then(|obstacle| obstacles.insert(obstacle));
            if let Err(err) = obstacle {
                log::warn!("Rejected prediction for object {}: {}", prediction.perception.id, err);
                return Err(err);
            }
        }
    }

    log::debug!(
        "Created {} obstacles from {} predicted objects",
        obstacles.len(),
        predictions.obstacles.len()
    );
    Ok(obstacles)
}

impl ObstacleSet {
    /// Builds the obstacle set for a planning cycle. See [create_obstacles].
    pub fn from_predictions(
        predictions: &PredictionObstacles,
        config: &ObstacleConfig,
    ) -> Result<Self, ObstacleError> {
        create_obstacles(predictions, config)
    }
}

/// Pairs each trajectory of an object with the ID of the obstacle it becomes.
fn hypotheses(prediction: &PredictionObstacle) -> SmallVec<[(String, Trajectory); 4]> {
    let base_id = prediction.perception.id;
    if prediction.trajectories.is_empty() {
        log::debug!("Object {} has no predicted trajectory", base_id);
        return smallvec![(base_id.to_string(), Trajectory::default())];
    }
    prediction
        .trajectories
        .iter()
        .enumerate()
        .map(|(i, trajectory)| (format!("{}_{}", base_id, i), trajectory.clone()))
        .collect()
}
