//! Movement system — advances positions along X.
//!
//! For every entity holding a [`Position`], the new position is the old one
//! plus `velocity * dt` on X. Y and Z are left untouched. The result is
//! written back through [`ComponentManager::add_component`], replacing the
//! stored instance.

use tracing::debug;

use engine_component::{ComponentManager, EntityId, Position};
use engine_math::{Vector3, display};

use crate::config::MovementConfig;
use crate::system::{System, SystemError};

/// Moves every positioned entity at a fixed velocity along X.
#[derive(Debug, Clone, Default)]
pub struct MovementSystem {
    config: MovementConfig,
    last_moved: usize,
}

impl MovementSystem {
    /// Create a movement system with the given configuration.
    #[must_use]
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            last_moved: 0,
        }
    }

    /// Returns the system configuration.
    #[must_use]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Returns how many entities the previous update advanced.
    #[must_use]
    pub fn last_moved(&self) -> usize {
        self.last_moved
    }

    fn advance(&self, manager: &mut ComponentManager, entity: EntityId, dt: f64) -> bool {
        let Some(position) = manager.get_component::<Position>(entity) else {
            return false;
        };

        let old = position.value;
        let moved = Vector3::new(old.x + self.config.velocity * dt, old.y, old.z);
        manager.add_component(entity, Position::from_vector(moved));

        if self.config.log_positions {
            debug!(%entity, position = %display(moved), "moved");
        }
        true
    }
}

impl System for MovementSystem {
    fn name(&self) -> &str {
        "movement"
    }

    fn update(
        &mut self,
        manager: &mut ComponentManager,
        entities: &[EntityId],
        dt: f64,
    ) -> Result<(), SystemError> {
        let mut moved = 0;
        for &entity in entities {
            if self.advance(manager, entity, dt) {
                moved += 1;
            }
        }
        self.last_moved = moved;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use engine_component::{IdSource, SequentialIds};

    use super::*;

    #[test]
    fn test_unit_step_moves_x_only() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let mut manager = ComponentManager::new();
        manager.add_component(e, Position::ORIGIN);

        let mut movement = MovementSystem::default();
        movement.update(&mut manager, &[e], 1.0).unwrap();

        assert_eq!(
            manager.get_component::<Position>(e),
            Some(&Position::new(1.0, 0.0, 0.0))
        );
        assert_eq!(movement.last_moved(), 1);
    }

    #[test]
    fn test_y_and_z_are_preserved() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let mut manager = ComponentManager::new();
        manager.add_component(e, Position::new(2.0, -3.0, 7.5));

        let mut movement = MovementSystem::default();
        movement.update(&mut manager, &[e], 0.25).unwrap();

        assert_eq!(
            manager.get_component::<Position>(e),
            Some(&Position::new(2.25, -3.0, 7.5))
        );
    }

    #[test]
    fn test_entity_without_position_is_skipped() {
        let mut ids = SequentialIds::new();
        let positioned = ids.next_id();
        let bare = ids.next_id();
        let mut manager = ComponentManager::new();
        manager.add_component(positioned, Position::ORIGIN);

        let mut movement = MovementSystem::default();
        let result = movement.update(&mut manager, &[bare, positioned], 1.0);

        assert!(result.is_ok());
        assert!(!manager.has_component::<Position>(bare));
        assert_eq!(manager.entity_count(), 1);
        assert!(manager.kinds_of(bare).is_empty());
        assert_eq!(
            manager.get_component::<Position>(positioned),
            Some(&Position::new(1.0, 0.0, 0.0))
        );
        assert_eq!(movement.last_moved(), 1);
    }

    #[test]
    fn test_configured_velocity() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let mut manager = ComponentManager::new();
        manager.add_component(e, Position::ORIGIN);

        let config = MovementConfig::new().with_velocity(4.0).with_logging(true);
        let mut movement = MovementSystem::new(config);
        movement.update(&mut manager, &[e], 0.5).unwrap();

        assert_eq!(
            manager.get_component::<Position>(e),
            Some(&Position::new(2.0, 0.0, 0.0))
        );
        assert!(movement.config().log_positions);
    }

    #[test]
    fn test_empty_entity_set() {
        let mut manager = ComponentManager::new();
        let mut movement = MovementSystem::default();
        movement.update(&mut manager, &[], 1.0).unwrap();
        assert_eq!(movement.last_moved(), 0);
        assert!(manager.is_empty());
    }
}
