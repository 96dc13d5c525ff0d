//! Tick loop configuration and cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::GameError;

/// Configuration for the game loop.
#[derive(Debug, Clone, PartialEq)]
pub struct TickConfig {
    /// Target ticks per second.
    pub tick_rate: f64,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl TickConfig {
    /// Target rate when none is given: one frame every ~16 ms.
    pub const DEFAULT_TICK_RATE: f64 = 60.0;

    /// Override the tick rate.
    #[must_use]
    pub fn with_tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Limit the loop to `max_ticks` frames.
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Check that the tick rate yields a usable frame budget.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTickRate`] if the rate is not finite, not
    /// strictly positive, or so small that one frame outlasts [`Duration`].
    pub fn validate(&self) -> Result<(), GameError> {
        self.frame_budget().map(|_| ())
    }

    /// Wall-clock time allotted to one frame.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTickRate`] under the same conditions as
    /// [`TickConfig::validate`].
    pub fn frame_budget(&self) -> Result<Duration, GameError> {
        let invalid = || GameError::InvalidTickRate(self.tick_rate);
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(invalid());
        }
        Duration::try_from_secs_f64(1.0 / self.tick_rate).map_err(|_| invalid())
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            max_ticks: 0,
        }
    }
}

/// A cloneable stop signal for a running game loop.
///
/// The loop checks the flag once per frame, before stepping.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    /// Create a handle that has not been triggered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to exit after the current frame.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once [`StopHandle::stop`] has been called on any clone.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
