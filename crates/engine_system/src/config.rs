//! System configuration.

/// Configuration for a [`MovementSystem`](crate::MovementSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct MovementConfig {
    /// Velocity along X, in world units per second.
    pub velocity: f64,
    /// Emit every resulting position as a diagnostic event.
    pub log_positions: bool,
}

impl MovementConfig {
    /// Unit velocity along X.
    pub const DEFAULT_VELOCITY: f64 = 1.0;

    /// Create a config with the default velocity and logging disabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            velocity: Self::DEFAULT_VELOCITY,
            log_positions: false,
        }
    }

    /// Override the velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    /// Enable or disable position logging.
    #[must_use]
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_positions = enabled;
        self
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self::new()
    }
}
