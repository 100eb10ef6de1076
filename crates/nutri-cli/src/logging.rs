//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! - `error`: environment failures (output path not writable)
//! - `warn`: degraded sources, unexpected headers
//! - `info`: per-stage progress and row counts
//! - `debug`: candidate path resolution, skipped records

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level filter applied when the env filter is not in use.
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when the user gave no explicit verbosity.
    pub use_env_filter: bool,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            json: false,
        }
    }
}

/// Initializes the global subscriber. Call once at process start.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };
    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
            .map_err(|error| anyhow::anyhow!("init logging: {error}"))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|error| anyhow::anyhow!("init logging: {error}"))?;
    }
    Ok(())
}
