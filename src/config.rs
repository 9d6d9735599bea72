use crate::error::ObstacleError;
use crate::perception::ObstacleType;
use serde::{Deserialize, Serialize};

/// Tunable policy for building obstacles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObstacleConfig {
    /// The object categories treated as static, regardless of reported velocity.
    pub static_types: Vec<ObstacleType>,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            static_types: vec![ObstacleType::UnknownUnmovable],
        }
    }
}

impl ObstacleConfig {
    /// Parses a configuration from JSON. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, ObstacleError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether obstacles of this category are static.
    pub fn is_static_type(&self, obstacle_type: ObstacleType) -> bool {
        self.static_types.contains(&obstacle_type)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_table() {
        let config = ObstacleConfig::default();
        assert!(config.is_static_type(ObstacleType::UnknownUnmovable));
        assert!(!config.is_static_type(ObstacleType::Unknown));
        assert!(!config.is_static_type(ObstacleType::Vehicle));
    }

    #[test]
    fn parse_json() {
        let config =
            ObstacleConfig::from_json(r#"{ "static_types": ["UNKNOWN", "UNKNOWN_UNMOVABLE"] }"#)
                .unwrap();
        assert!(config.is_static_type(ObstacleType::Unknown));
        assert!(config.is_static_type(ObstacleType::UnknownUnmovable));
        assert!(!config.is_static_type(ObstacleType::Pedestrian));

        assert_eq!(ObstacleConfig::from_json("{}").unwrap(), ObstacleConfig::default());
    }

    #[test]
    fn reject_bad_json() {
        assert!(matches!(
            ObstacleConfig::from_json(r#"{ "static_typez": [] }"#),
            Err(ObstacleError::Config(_))
        ));
        assert!(ObstacleConfig::from_json(r#"{ "static_types": ["TREE"] }"#).is_err());
    }
}
