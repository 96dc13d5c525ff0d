//! Entity type and identifier sources.
//!
//! An [`Entity`] is an identity with no inherent data: a single [`EntityId`]
//! used as the key into component storage. Identifiers come from an
//! [`IdSource`] passed in by the caller, so generation is never hidden global
//! state.

use uuid::Uuid;

/// A unique entity identifier.
///
/// Identifiers are immutable once assigned and unique for the lifetime of the
/// [`IdSource`] that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// A source of fresh entity identifiers.
pub trait IdSource {
    /// Produce an identifier never returned before by this source.
    fn next_id(&mut self) -> EntityId;
}

/// Produces random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> EntityId {
        EntityId(Uuid::new_v4())
    }
}

/// Produces monotonically increasing identifiers.
///
/// Deterministic, which makes it the source of choice for tests and replays.
/// Counting starts at 1; the nil UUID is never handed out.
#[derive(Debug)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    /// Creates a new source. IDs start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the number of identifiers handed out so far.
    #[must_use]
    pub fn count(&self) -> u128 {
        self.next - 1
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        EntityId(Uuid::from_u128(id))
    }
}

/// An identity holder. Entities carry no data; components are attached to
/// their [`EntityId`] in a `ComponentManager`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    id: EntityId,
}

impl Entity {
    /// Create an entity with a fresh identifier drawn from `source`.
    pub fn spawn(source: &mut (impl IdSource + ?Sized)) -> Self {
        Self {
            id: source.next_id(),
        }
    }

    /// Create an entity for an identifier obtained elsewhere.
    #[must_use]
    pub const fn with_id(id: EntityId) -> Self {
        Self { id }
    }

    /// Returns the entity's identifier.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sequential_ids_are_unique_and_ordered() {
        let mut ids = SequentialIds::new();
        let e1 = Entity::spawn(&mut ids);
        let e2 = Entity::spawn(&mut ids);
        let e3 = Entity::spawn(&mut ids);
        assert_eq!(e1.id().uuid().as_u128(), 1);
        assert_eq!(e2.id().uuid().as_u128(), 2);
        assert_eq!(e3.id().uuid().as_u128(), 3);
        assert_eq!(ids.count(), 3);
    }

    #[test]
    fn test_uuid_source_produces_distinct_ids() {
        let mut source = UuidSource;
        let ids: HashSet<EntityId> = (0..64).map(|_| source.next_id()).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn test_entity_with_id() {
        let id = EntityId::from_uuid(Uuid::from_u128(42));
        let e = Entity::with_id(id);
        assert_eq!(e.id(), id);
        assert_eq!(e, Entity::with_id(id));
    }

    #[test]
    fn test_display() {
        let id = EntityId::from_uuid(Uuid::nil());
        assert_eq!(
            id.to_string(),
            "Entity(00000000-0000-0000-0000-000000000000)"
        );
    }
}
