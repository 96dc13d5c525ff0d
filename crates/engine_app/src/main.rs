//! # engine_app — driver
//!
//! Builds a [`Game`], spawns the requested entities at the origin, and runs
//! the loop on a blocking worker until it finishes or Ctrl-C is pressed.
//!
//! Logging honours `RUST_LOG`; on top of it, `engine_app=info` and
//! `engine_system=debug` are always added, so each moved position is printed.
//! Set `RUST_LOG=engine_app=trace` to also see the per-frame marker.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use engine_app::config::log_filter;
use engine_app::{Args, Game, StopHandle};
use engine_component::{ComponentManager, Entity, IdSource, Position, SequentialIds, UuidSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::from_default_env())?)
        .init();

    let args = Args::parse();
    let config = args.tick_config();
    config.validate()?;

    let mut ids: Box<dyn IdSource + Send> = if args.seed_ids {
        Box::new(SequentialIds::new())
    } else {
        Box::new(UuidSource)
    };

    let mut game = Game::new(ComponentManager::new());
    for _ in 0..args.entities {
        let entity = Entity::spawn(ids.as_mut());
        game.component_manager_mut()
            .add_component(entity.id(), Position::ORIGIN);
        game.add_entity(entity);
    }
    info!(entities = game.entity_count(), "world populated");

    let stop = StopHandle::new();
    let loop_stop = stop.clone();
    let mut worker =
        tokio::task::spawn_blocking(move || game.start_game_loop(&config, &loop_stop));

    let ticks = tokio::select! {
        joined = &mut worker => joined??,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, stopping");
            stop.stop();
            worker.await??
        }
    };

    info!(ticks, "engine shut down");
    Ok(())
}
