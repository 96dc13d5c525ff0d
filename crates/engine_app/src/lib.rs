//! # engine_app
//!
//! The game loop for the frame-driven ECS. A [`Game`] owns the entity
//! registry, the [`ComponentManager`](engine_component::ComponentManager),
//! the ordered system list, and the clock, and steps every system once per
//! frame.
//!
//! ## Frame lifecycle
//!
//! 1. Read the clock and compute the delta since the previous frame.
//! 2. Run each system, in registration order, over all registered entities.
//! 3. Sleep for the rest of the frame budget.
//!
//! The loop runs until its [`StopHandle`] is triggered, a frame limit is
//! reached, or a system fails.

pub mod clock;
pub mod config;
pub mod error;
pub mod game;
pub mod tick;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::Args;
pub use error::GameError;
pub use game::{Game, GameState};
pub use tick::{StopHandle, TickConfig};
