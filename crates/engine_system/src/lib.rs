//! # engine_system
//!
//! The "S" in ECS: the [`System`] contract and the built-in systems.
//!
//! ## Usage
//!
//! ```rust
//! use engine_component::{ComponentManager, Entity, Position, SequentialIds};
//! use engine_system::{MovementConfig, MovementSystem, System};
//!
//! let mut ids = SequentialIds::new();
//! let entity = Entity::spawn(&mut ids);
//! let mut manager = ComponentManager::new();
//! manager.add_component(entity.id(), Position::ORIGIN);
//!
//! let mut movement = MovementSystem::new(MovementConfig::default());
//! movement.update(&mut manager, &[entity.id()], 1.0).unwrap();
//!
//! assert_eq!(
//!     manager.get_component::<Position>(entity.id()),
//!     Some(&Position::new(1.0, 0.0, 0.0))
//! );
//! ```

pub mod config;
pub mod movement;
pub mod system;

pub use config::MovementConfig;
pub use movement::MovementSystem;
pub use system::{System, SystemError};
