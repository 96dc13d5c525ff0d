//! Command-line configuration for the `engine_app` binary.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::tick::TickConfig;

/// Directives added on top of `RUST_LOG`. `engine_system=debug` makes the
/// movement system's per-entity position output visible by default.
pub const DEFAULT_LOG_DIRECTIVES: &[&str] = &["engine_app=info", "engine_system=debug"];

/// Extend `base` with [`DEFAULT_LOG_DIRECTIVES`].
///
/// # Errors
///
/// Returns [`ParseError`] if a directive fails to parse.
pub fn log_filter(base: EnvFilter) -> Result<EnvFilter, ParseError> {
    DEFAULT_LOG_DIRECTIVES
        .iter()
        .try_fold(base, |filter, directive| Ok(filter.add_directive(directive.parse()?)))
}

/// Run the frame-driven ECS simulation.
#[derive(Debug, Clone, Parser)]
#[command(name = "engine_app", about = "Frame-driven ECS simulation loop")]
pub struct Args {
    /// Target frames per second
    #[arg(short, long, default_value_t = TickConfig::DEFAULT_TICK_RATE)]
    pub tick_rate: f64,

    /// Stop after this many frames (0 = run until Ctrl-C)
    #[arg(short, long, default_value_t = 0)]
    pub max_ticks: u64,

    /// Number of entities spawned at the origin with a position
    #[arg(short, long, default_value_t = 1)]
    pub entities: usize,

    /// Use sequential entity IDs instead of random UUIDs
    #[arg(long)]
    pub seed_ids: bool,
}

impl Args {
    /// The loop configuration selected by these arguments.
    #[must_use]
    pub fn tick_config(&self) -> TickConfig {
        TickConfig::default()
            .with_tick_rate(self.tick_rate)
            .with_max_ticks(self.max_ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_shows_movement_output() {
        use tracing_subscriber::filter::LevelFilter;

        let filter = log_filter(EnvFilter::new("")).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        let rendered = filter.to_string();
        assert!(rendered.contains("engine_system=debug"));
        assert!(rendered.contains("engine_app=info"));
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["engine_app"]);
        assert_eq!(args.tick_config(), TickConfig::default());
        assert_eq!(args.entities, 1);
        assert!(!args.seed_ids);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "engine_app",
            "--tick-rate",
            "30",
            "--max-ticks",
            "120",
            "--entities",
            "4",
            "--seed-ids",
        ]);
        let config = args.tick_config();
        assert_eq!(config.tick_rate, 30.0);
        assert_eq!(config.max_ticks, 120);
        assert_eq!(args.entities, 4);
        assert!(args.seed_ids);
    }
}
