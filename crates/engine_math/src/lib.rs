//! # engine_math
//!
//! Math types for the frame-driven ECS. Re-exports [`glam`] for linear
//! algebra and defines [`Vector3`], the three-coordinate value type wrapped by
//! spatial components.

use std::fmt;

pub use glam::DVec3;

/// A three-coordinate value type with independent `x`, `y` and `z` fields.
///
/// Double precision keeps positions stable when a simulation accumulates many
/// small per-frame increments.
pub type Vector3 = DVec3;

/// Renders a [`Vector3`] as `"x, y, z"`.
///
/// Used by diagnostic output; `glam`'s own `Display` wraps the coordinates in
/// brackets.
#[derive(Debug, Clone, Copy)]
pub struct Vector3Display(pub Vector3);

impl fmt::Display for Vector3Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}

/// Wrap a vector for `"x, y, z"` formatting.
#[must_use]
pub fn display(v: Vector3) -> Vector3Display {
    Vector3Display(v)
}
