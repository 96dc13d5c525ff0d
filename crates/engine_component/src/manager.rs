//! Per-entity, per-kind component storage.
//!
//! The [`ComponentManager`] maps each entity to a bucket of components keyed
//! by [`ComponentKind`]. Buckets are created lazily on the first attach for an
//! entity, so entities accumulate an open set of kinds without a fixed
//! schema. There is no detach operation: storage for an entity outlives its
//! registration anywhere else.

use std::collections::HashMap;

use crate::component::{Component, ComponentKind, ComponentValue};
use crate::entity::EntityId;

/// Two-level component storage: entity, then kind.
#[derive(Debug, Default)]
pub struct ComponentManager {
    entities: HashMap<EntityId, HashMap<ComponentKind, ComponentValue>>,
}

impl ComponentManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
        }
    }

    /// Attach `component` to `entity`, replacing any component of the same
    /// kind already attached.
    pub fn add_component<C: Component>(&mut self, entity: EntityId, component: C) {
        self.entities
            .entry(entity)
            .or_default()
            .insert(C::KIND, component.into_value());
    }

    /// Returns the component of type `C` attached to `entity`, if any.
    #[must_use]
    pub fn get_component<C: Component>(&self, entity: EntityId) -> Option<&C> {
        self.get_value(entity, C::KIND).and_then(C::from_value)
    }

    /// Returns the stored value of kind `kind` attached to `entity`, if any.
    #[must_use]
    pub fn get_value(&self, entity: EntityId, kind: ComponentKind) -> Option<&ComponentValue> {
        self.entities.get(&entity)?.get(&kind)
    }

    /// Returns `true` if a component of type `C` is attached to `entity`.
    #[must_use]
    pub fn has_component<C: Component>(&self, entity: EntityId) -> bool {
        self.has_kind(entity, C::KIND)
    }

    /// Returns `true` if a component of kind `kind` is attached to `entity`.
    #[must_use]
    pub fn has_kind(&self, entity: EntityId, kind: ComponentKind) -> bool {
        self.entities
            .get(&entity)
            .is_some_and(|bucket| bucket.contains_key(&kind))
    }

    /// Returns the kinds attached to `entity`, sorted.
    #[must_use]
    pub fn kinds_of(&self, entity: EntityId) -> Vec<ComponentKind> {
        let mut kinds: Vec<ComponentKind> = self
            .entities
            .get(&entity)
            .map(|bucket| bucket.keys().copied().collect())
            .unwrap_or_default();
        kinds.sort();
        kinds
    }

    /// Returns the number of entities with at least one component.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if no component has ever been attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{IdSource, SequentialIds};
    use crate::position::Position;

    #[test]
    fn test_add_then_get_and_has() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let mut manager = ComponentManager::new();

        manager.add_component(e, Position::new(1.0, 2.0, 3.0));

        assert!(manager.has_component::<Position>(e));
        assert!(manager.has_kind(e, Position::KIND));
        assert_eq!(
            manager.get_component::<Position>(e),
            Some(&Position::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_absent_entity_is_silent() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let manager = ComponentManager::new();

        assert!(!manager.has_component::<Position>(e));
        assert!(manager.get_component::<Position>(e).is_none());
        assert!(manager.kinds_of(e).is_empty());
    }

    #[test]
    fn test_absent_kind_on_existing_bucket() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let mut manager = ComponentManager::new();
        manager.add_component(e, Position::ORIGIN);

        let other = ComponentKind::from_name("Velocity");
        assert!(!manager.has_kind(e, other));
        assert!(manager.get_value(e, other).is_none());
    }

    #[test]
    fn test_repeat_attach_overwrites() {
        let mut ids = SequentialIds::new();
        let e = ids.next_id();
        let mut manager = ComponentManager::new();

        manager.add_component(e, Position::ORIGIN);
        manager.add_component(e, Position::new(5.0, 0.0, 0.0));

        assert_eq!(
            manager.get_component::<Position>(e),
            Some(&Position::new(5.0, 0.0, 0.0))
        );
        assert_eq!(manager.kinds_of(e), vec![Position::KIND]);
        assert_eq!(manager.entity_count(), 1);
    }

    #[test]
    fn test_buckets_created_lazily() {
        let mut ids = SequentialIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let mut manager = ComponentManager::new();
        assert!(manager.is_empty());

        manager.add_component(a, Position::ORIGIN);
        assert_eq!(manager.entity_count(), 1);
        assert!(!manager.has_component::<Position>(b));

        manager.add_component(b, Position::ORIGIN);
        assert_eq!(manager.entity_count(), 2);
    }
}
