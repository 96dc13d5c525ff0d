//! Game-level error types.

use engine_system::SystemError;

/// Errors raised while stepping or running a [`Game`](crate::Game).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A system failed during a step. The step and any running loop stop.
    #[error(transparent)]
    System(#[from] SystemError),

    /// The tick rate must be a finite, positive number of ticks per second.
    #[error("invalid tick rate {0}: must be finite and greater than zero")]
    InvalidTickRate(f64),

    /// The game loop can be started only once.
    #[error("game loop already running")]
    AlreadyRunning,
}
