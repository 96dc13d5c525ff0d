//! The [`Game`]: entity registry, component storage, systems, and timing.
//!
//! A game starts out [`GameState::Constructed`]. Starting the loop moves it
//! to [`GameState::Running`] for good; it never goes back.
//!
//! Each step hands every system the full set of registered entity IDs and the
//! step's delta time, in system registration order. Removing an entity only
//! drops it from the registry: its components stay in the
//! [`ComponentManager`] and are still visible to lookups by ID.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use tracing::{error, info, trace, warn};

use engine_component::{ComponentManager, Entity, EntityId};
use engine_system::{MovementConfig, MovementSystem, System};

use crate::clock::{Clock, MonotonicClock};
use crate::error::GameError;
use crate::tick::{StopHandle, TickConfig};

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Built, loop not started, clock not running.
    Constructed,
    /// The loop has been started.
    Running,
}

/// Owns the simulation: registry, components, systems, and clock.
pub struct Game {
    entities: HashMap<EntityId, Entity>,
    components: ComponentManager,
    systems: Vec<Box<dyn System>>,
    clock: Box<dyn Clock>,
    /// Clock reading at the previous [`Game::update`].
    last_frame_time: Duration,
    frame: u64,
    state: GameState,
}

impl Game {
    /// Create a game bound to `components`, running a logging
    /// [`MovementSystem`] on a wall clock.
    #[must_use]
    pub fn new(components: ComponentManager) -> Self {
        let movement = MovementSystem::new(MovementConfig::new().with_logging(true));
        Self::with_systems(components, vec![Box::new(movement)])
    }

    /// Create a game bound to `components` running `systems` in the given
    /// order.
    #[must_use]
    pub fn with_systems(components: ComponentManager, systems: Vec<Box<dyn System>>) -> Self {
        Self {
            entities: HashMap::new(),
            components,
            systems,
            clock: Box::new(MonotonicClock::new()),
            last_frame_time: Duration::ZERO,
            frame: 0,
            state: GameState::Constructed,
        }
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Register `entity`, replacing any entity with the same ID.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.id(), entity);
    }

    /// Deregister the entity with `id`, returning it if it was registered.
    ///
    /// Components attached to `id` are left in place.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    /// Returns the entity registered under `id`, if any.
    #[must_use]
    pub fn get_entity_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Returns every registered entity ID exactly once, in no particular
    /// order.
    #[must_use]
    pub fn get_all_entity_ids(&self) -> Vec<EntityId> {
        self.entities.keys().copied().collect()
    }

    /// Returns the number of registered entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the component storage.
    #[must_use]
    pub fn component_manager(&self) -> &ComponentManager {
        &self.components
    }

    /// Returns the component storage mutably.
    pub fn component_manager_mut(&mut self) -> &mut ComponentManager {
        &mut self.components
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of steps run so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one step using the time elapsed since the previous update.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::System`] if any system fails.
    pub fn update(&mut self) -> Result<(), GameError> {
        let now = self.clock.elapsed();
        let dt = now.saturating_sub(self.last_frame_time);
        self.last_frame_time = now;
        self.step(dt.as_secs_f64())
    }

    /// Run every system once over all registered entities with delta time
    /// `dt` (seconds).
    ///
    /// Stops at the first failing system; later systems do not run.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::System`] if any system fails.
    pub fn step(&mut self, dt: f64) -> Result<(), GameError> {
        let ids = self.get_all_entity_ids();
        self.frame += 1;

        for system in &mut self.systems {
            if let Err(e) = system.update(&mut self.components, &ids, dt) {
                error!(frame = self.frame, system = system.name(), %e, "system failed");
                return Err(e.into());
            }
        }

        trace!(frame = self.frame, dt, entities = ids.len(), "step complete");
        Ok(())
    }

    /// Run the game loop until `stop` is triggered or `config.max_ticks`
    /// frames have run. Returns the number of frames run.
    ///
    /// Each frame steps the simulation, then sleeps for whatever remains of
    /// the frame budget.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidTickRate`] for an unusable config,
    /// [`GameError::AlreadyRunning`] if the loop was started before, and
    /// [`GameError::System`] if a system fails, which ends the loop.
    pub fn start_game_loop(
        &mut self,
        config: &TickConfig,
        stop: &StopHandle,
    ) -> Result<u64, GameError> {
        let frame_budget = config.frame_budget()?;
        if self.state == GameState::Running {
            return Err(GameError::AlreadyRunning);
        }

        self.last_frame_time = self.clock.elapsed();
        self.clock.start();
        self.state = GameState::Running;

        let mut ticks = 0u64;

        info!(
            tick_rate = config.tick_rate,
            max_ticks = config.max_ticks,
            entities = self.entities.len(),
            systems = self.systems.len(),
            "starting game loop"
        );

        while !stop.is_stopped() {
            let start = Instant::now();

            trace!(frame = self.frame + 1, "frame");
            self.update()?;

            ticks += 1;
            if config.max_ticks > 0 && ticks >= config.max_ticks {
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < frame_budget {
                std::thread::sleep(frame_budget - elapsed);
            } else {
                warn!(
                    frame = self.frame,
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = frame_budget.as_millis() as u64,
                    "frame exceeded time budget"
                );
            }
        }

        info!(ticks, stopped = stop.is_stopped(), "game loop stopped");
        Ok(ticks)
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let systems: Vec<&str> = self.systems.iter().map(|s| s.name()).collect();
        f.debug_struct("Game")
            .field("entities", &self.entities.len())
            .field("components", &self.components.entity_count())
            .field("systems", &systems)
            .field("last_frame_time", &self.last_frame_time)
            .field("frame", &self.frame)
            .field("state", &self.state)
            .finish()
    }
}
