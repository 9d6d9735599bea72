use thiserror::Error;

/// Reasons an obstacle or obstacle set could not be built.
#[derive(Error, Debug)]
pub enum ObstacleError {
    #[error("obstacle ID must not be empty")]
    EmptyId,

    #[error("duplicate obstacle ID: {id}")]
    DuplicateId { id: String },

    #[error("trajectory of obstacle {id} is not strictly increasing in time at point {index}")]
    UnsortedTrajectory { id: String, index: usize },

    #[error("trajectory of obstacle {id} has a non-finite time at point {index}")]
    NonFiniteTime { id: String, index: usize },

    #[error("obstacle {id} has an invalid length or width")]
    InvalidDimensions { id: String },

    #[error("invalid obstacle configuration: {0}")]
    Config(#[from] serde_json::Error),
}
