//! Time sources for the game loop.
//!
//! A [`Clock`] reports elapsed time since it was started. Readings never
//! decrease.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic elapsed-time source.
pub trait Clock: Send {
    /// Start measuring. Calling it again has no effect.
    fn start(&mut self);

    /// Time elapsed since [`Clock::start`].
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time source backed by [`Instant`]. Reads zero until started.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    started: Option<Instant>,
}

impl MonotonicClock {
    /// Create a clock that has not started yet.
    #[must_use]
    pub fn new() -> Self {
        Self { started: None }
    }
}

impl Clock for MonotonicClock {
    fn start(&mut self) {
        self.started.get_or_insert_with(Instant::now);
    }

    fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or_default()
    }
}

/// A clock advanced by hand, for deterministic stepping.
///
/// Clones share the same reading, so a test can keep one handle and give the
/// other to a [`Game`](crate::Game).
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a clock reading zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `by`. The reading saturates at
    /// `u64::MAX` nanoseconds.
    pub fn advance(&self, by: Duration) {
        let nanos = u64::try_from(by.as_nanos()).unwrap_or(u64::MAX);
        // The closure always returns `Some`, so the update cannot fail.
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(nanos))
            });
    }

    /// Move the clock forward by `seconds`. Negative or NaN values leave it
    /// unchanged; values too large for a [`Duration`] saturate.
    pub fn advance_secs(&self, seconds: f64) {
        let by = Duration::try_from_secs_f64(seconds).unwrap_or(if seconds > 0.0 {
            Duration::MAX
        } else {
            Duration::ZERO
        });
        self.advance(by);
    }
}

impl Clock for ManualClock {
    // Time advanced before start is kept.
    fn start(&mut self) {}

    fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}
