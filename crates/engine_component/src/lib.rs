//! # engine_component
//!
//! The "E" and "C" in ECS: entity identity and component storage.
//!
//! This crate provides:
//!
//! - [`Entity`] / [`EntityId`] — identity holders with no inherent data.
//! - [`IdSource`] — injectable identifier generation ([`UuidSource`],
//!   [`SequentialIds`]).
//! - [`Component`] trait and [`ComponentKind`] — compile-time kind tags.
//! - [`ComponentValue`] — the tagged union of all component variants.
//! - [`Position`] — the spatial component.
//! - [`ComponentManager`] — per-entity, per-kind storage.

pub mod component;
pub mod entity;
pub mod manager;
pub mod position;

pub use component::{Component, ComponentKind, ComponentValue};
pub use entity::{Entity, EntityId, IdSource, SequentialIds, UuidSource};
pub use manager::ComponentManager;
pub use position::Position;
