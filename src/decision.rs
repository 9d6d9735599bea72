use serde::{Deserialize, Serialize};

/// A decision downstream planning logic has attached to an obstacle.
/// Obstacles store these but never act on them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectDecision {
    /// The obstacle is irrelevant to the ego vehicle.
    Ignore,
    /// Stop `distance_s` metres behind the obstacle.
    Stop { distance_s: f64 },
    /// Follow behind the obstacle at `distance_s` metres.
    Follow { distance_s: f64 },
    /// Let the obstacle pass first, keeping `distance_s` metres back.
    Yield { distance_s: f64 },
    /// Pass in front of the obstacle with a lead of `distance_s` metres.
    Overtake { distance_s: f64 },
    /// Pass beside the obstacle with `distance_l` metres of lateral clearance;
    /// positive to the left.
    Nudge { distance_l: f64 },
}
