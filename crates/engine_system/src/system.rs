//! The [`System`] contract.
//!
//! A system is a behaviour unit that reads and writes components for a batch
//! of entities once per simulation step. Systems are invoked in registration
//! order and only ever see the [`ComponentManager`] for the duration of one
//! call.

use engine_component::{ComponentManager, EntityId};

/// Errors a system can report from an update.
#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    /// The system could not complete its update.
    #[error("system `{system}` failed: {reason}")]
    Failed {
        /// Name of the failing system.
        system: String,
        /// What went wrong.
        reason: String,
    },
}

/// A behaviour unit run once per step.
pub trait System: Send {
    /// A human-readable name for this system (e.g. `"movement"`).
    fn name(&self) -> &str;

    /// Advance `entities` by `dt` seconds.
    ///
    /// Components are read and written through `manager`. Entities lacking
    /// the components the system needs are skipped without error.
    ///
    /// # Errors
    ///
    /// Returns [`SystemError`] if the system cannot complete the step; the
    /// caller treats this as fatal for the running loop.
    fn update(
        &mut self,
        manager: &mut ComponentManager,
        entities: &[EntityId],
        dt: f64,
    ) -> Result<(), SystemError>;
}
