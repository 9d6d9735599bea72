use super::Obstacle;
use crate::error::ObstacleError;
use crate::ObstacleKey;
use slotmap::SlotMap;
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// The obstacles of a single planning cycle.
///
/// Obstacles are never removed from a set; the whole set is dropped at the
/// end of the cycle. Iteration therefore follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct ObstacleSet {
    /// The obstacles.
    obstacles: SlotMap<ObstacleKey, Obstacle>,
    /// Maps obstacle IDs to their keys.
    index: HashMap<String, ObstacleKey>,
}

impl ObstacleSet {
    /// Creates an empty obstacle set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates an empty obstacle set with room for `capacity` obstacles.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            obstacles: SlotMap::with_capacity_and_key(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds an obstacle to the set. Fails if its ID is already taken.
    pub fn insert(&mut self, obstacle: Obstacle) -> Result<ObstacleKey, ObstacleError> {
        if self.index.contains_key(obstacle.id()) {
            return Err(ObstacleError::DuplicateId {
                id: obstacle.id().to_owned(),
            });
        }
        let id = obstacle.id().to_owned();
        let key = self.obstacles.insert(obstacle);
        self.index.insert(id, key);
        Ok(key)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, key: ObstacleKey) -> Option<&Obstacle> {
        self.obstacles.get(key)
    }

    pub fn get_mut(&mut self, key: ObstacleKey) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(key)
    }

    /// Gets the key of the obstacle with the given ID.
    pub fn key_of(&self, id: &str) -> Option<ObstacleKey> {
        self.index.get(id).copied()
    }

    /// Gets the obstacle with the given ID.
    pub fn find(&self, id: &str) -> Option<&Obstacle> {
        self.key_of(id).and_then(|key| self.obstacles.get(key))
    }

    /// Gets the obstacle with the given ID for attaching decisions.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Obstacle> {
        let key = self.key_of(id)?;
        self.obstacles.get_mut(key)
    }

    /// Returns an iterator over all the obstacles in the set.
    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.values()
    }

    /// Returns a mutable iterator over all the obstacles in the set.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.values_mut()
    }

    /// Returns an iterator over the static obstacles.
    pub fn static_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.iter().filter(|obs| obs.is_static())
    }

    /// Returns an iterator over the obstacles which are not static.
    pub fn dynamic_obstacles(&self) -> impl Iterator<Item = &Obstacle> {
        self.iter().filter(|obs| !obs.is_static())
    }

    /// Removes every decision from every obstacle.
    pub fn clear_decisions(&mut self) {
        for obstacle in self.iter_mut() {
            obstacle.decisions_mut().clear();
        }
    }

    /// Consumes the set, returning the obstacles in insertion order.
    pub fn into_vec(self) -> Vec<Obstacle> {
        self.obstacles.into_iter().map(|(_, obs)| obs).collect()
    }
}

impl Index<ObstacleKey> for ObstacleSet {
    type Output = Obstacle;

    fn index(&self, key: ObstacleKey) -> &Obstacle {
        &self.obstacles[key]
    }
}

impl IndexMut<ObstacleKey> for ObstacleSet {
    fn index_mut(&mut self, key: ObstacleKey) -> &mut Obstacle {
        &mut self.obstacles[key]
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Obstacle;
    type IntoIter = slotmap::basic::Values<'a, ObstacleKey, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.values()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::ObstacleConfig;
    use crate::decision::ObjectDecision;
    use crate::math::{Point2d, Vector2d};
    use crate::perception::{ObstacleType, PerceptionObstacle};
    use crate::trajectory::Trajectory;

    fn obstacle(id: &str, obstacle_type: ObstacleType) -> Obstacle {
        let perception = PerceptionObstacle {
            id: 1,
            obstacle_type,
            position: Point2d::new(0.0, 0.0),
            theta: 0.0,
            velocity: Vector2d::new(0.0, 0.0),
            length: 1.0,
            width: 1.0,
            height: 1.0,
            timestamp: 0.0,
        };
        Obstacle::new(id, perception, Trajectory::default(), &ObstacleConfig::default()).unwrap()
    }

    #[test]
    fn lookup_by_id_and_key() {
        let mut set = ObstacleSet::new();
        let a = set.insert(obstacle("a", ObstacleType::Vehicle)).unwrap();
        let b = set.insert(obstacle("b", ObstacleType::UnknownUnmovable)).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.key_of("a"), Some(a));
        assert_eq!(set[b].id(), "b");
        assert_eq!(set.find("b").map(|o| o.id()), Some("b"));
        assert!(set.find("c").is_none());
        assert_eq!(set.static_obstacles().map(|o| o.id()).collect::<Vec<_>>(), ["b"]);
        assert_eq!(set.dynamic_obstacles().map(|o| o.id()).collect::<Vec<_>>(), ["a"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut set = ObstacleSet::new();
        set.insert(obstacle("a", ObstacleType::Vehicle)).unwrap();
        assert!(matches!(
            set.insert(obstacle("a", ObstacleType::Bicycle)),
            Err(ObstacleError::DuplicateId { .. })
        ));
        assert_eq!(set.len(), 1);
        assert_eq!(set.find("a").unwrap().perception().obstacle_type, ObstacleType::Vehicle);
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut set = ObstacleSet::with_capacity(3);
        for id in ["z", "a", "m"] {
            set.insert(obstacle(id, ObstacleType::Vehicle)).unwrap();
        }
        let ids = set.iter().map(|o| o.id().to_owned()).collect::<Vec<_>>();
        assert_eq!(ids, ["z", "a", "m"]);
        let ids = set.into_vec().into_iter().map(|o| o.id().to_owned()).collect::<Vec<_>>();
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn decisions_written_through_set() {
        let mut set = ObstacleSet::new();
        set.insert(obstacle("a", ObstacleType::Vehicle)).unwrap();
        set.find_mut("a").unwrap().add_decision(ObjectDecision::Stop { distance_s: 3.0 });
        assert_eq!(set.find("a").unwrap().decisions().len(), 1);
        set.clear_decisions();
        assert!(set.find("a").unwrap().decisions().is_empty());
    }
}
