//! Position component.

use engine_math::Vector3;

use crate::component::{Component, ComponentValue};

/// A world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    /// The position's coordinates.
    pub value: Vector3,
}

impl Position {
    /// The origin.
    pub const ORIGIN: Self = Self {
        value: Vector3::ZERO,
    };

    /// Create a position from coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            value: Vector3::new(x, y, z),
        }
    }

    /// Create a position wrapping an existing vector.
    #[must_use]
    pub const fn from_vector(value: Vector3) -> Self {
        Self { value }
    }
}

impl Component for Position {
    const NAME: &'static str = "Position";

    fn into_value(self) -> ComponentValue {
        ComponentValue::Position(self)
    }

    fn from_value(value: &ComponentValue) -> Option<&Self> {
        match value {
            ComponentValue::Position(p) => Some(p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        assert_eq!(Position::ORIGIN, Position::new(0.0, 0.0, 0.0));
        assert_eq!(Position::default(), Position::ORIGIN);
    }

    #[test]
    fn test_from_vector() {
        let p = Position::from_vector(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Position::new(1.0, 2.0, 3.0));
    }
}
