//! Core [`Component`] trait, component kinds, and the stored value union.
//!
//! Every piece of data attached to an entity implements [`Component`]. Each
//! component type carries a [`ComponentKind`] tag computed at compile time
//! from its name, and converts to and from [`ComponentValue`], the tagged
//! union the `ComponentManager` stores. Lookups never inspect types at
//! runtime; they match on the kind tag and the union variant.

use crate::position::Position;

/// A stable tag identifying a component kind, derived from the component's
/// name using the FNV-1a 64-bit hash algorithm.
///
/// The same name always yields the same kind, in every build and on every
/// platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKind(pub u64);

impl ComponentKind {
    /// FNV-1a 64-bit offset basis.
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;

    /// FNV-1a 64-bit prime.
    const FNV_PRIME: u64 = 0x0100_0000_01b3;

    /// Compute the [`ComponentKind`] for a component name.
    ///
    /// # Algorithm (FNV-1a 64-bit)
    ///
    /// ```text
    /// hash = 0xcbf29ce484222325          (offset basis)
    /// for each byte in name.as_bytes():
    ///     hash = hash XOR byte
    ///     hash = hash * 0x00000100000001b3  (prime)
    /// return hash
    /// ```
    #[must_use]
    pub const fn from_name(name: &str) -> Self {
        let bytes = name.as_bytes();
        let mut hash = Self::FNV_OFFSET_BASIS;
        let mut i = 0;
        while i < bytes.len() {
            hash ^= bytes[i] as u64;
            hash = hash.wrapping_mul(Self::FNV_PRIME);
            i += 1;
        }
        Self(hash)
    }

    /// Returns the [`ComponentKind`] of component type `T`.
    #[must_use]
    pub const fn of<T: Component>() -> Self {
        T::KIND
    }
}

/// The core component trait.
///
/// A component is a typed data fragment attached to an entity under its
/// [`Component::KIND`]. At most one instance of a kind is attached to an
/// entity at a time.
///
/// Adding a component type means adding a [`ComponentValue`] variant for it
/// and implementing this trait to move in and out of that variant.
pub trait Component: Sized + Send + 'static {
    /// A human-readable name for this component type.
    const NAME: &'static str;

    /// The storage key for this component type.
    const KIND: ComponentKind = ComponentKind::from_name(Self::NAME);

    /// Wrap this component in its [`ComponentValue`] variant.
    fn into_value(self) -> ComponentValue;

    /// Borrow the component out of `value` if it is this type's variant.
    fn from_value(value: &ComponentValue) -> Option<&Self>;
}

/// A stored component instance, tagged by variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentValue {
    /// A 3D position.
    Position(Position),
}

impl ComponentValue {
    /// Returns the kind of the wrapped component.
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Position(_) => Position::KIND,
        }
    }

    /// Returns the name of the wrapped component.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Position(_) => Position::NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_from_name() {
        assert_eq!(Position::KIND, ComponentKind::from_name("Position"));
        assert_eq!(ComponentKind::of::<Position>(), Position::KIND);
    }

    #[test]
    fn test_kind_differs_between_names() {
        assert_ne!(
            ComponentKind::from_name("Position"),
            ComponentKind::from_name("Velocity")
        );
    }

    #[test]
    fn test_fnv1a_known_vector() {
        // FNV-1a 64-bit of the empty string is the offset basis itself.
        assert_eq!(
            ComponentKind::from_name(""),
            ComponentKind(0xcbf2_9ce4_8422_2325)
        );
        // FNV-1a 64-bit of "a".
        assert_eq!(
            ComponentKind::from_name("a"),
            ComponentKind(0xaf63_dc4c_8601_ec8c)
        );
    }

    #[test]
    fn test_value_kind_and_downcast() {
        let value = Position::new(1.0, 2.0, 3.0).into_value();
        assert_eq!(value.kind(), Position::KIND);
        assert_eq!(value.name(), "Position");
        assert_eq!(
            Position::from_value(&value),
            Some(&Position::new(1.0, 2.0, 3.0))
        );
    }
}
