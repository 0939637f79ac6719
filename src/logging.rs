//! Tracing subscriber setup

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global subscriber, writing to stderr so command output on
/// stdout stays clean. `RUST_LOG` wins over the configured level;
/// `level_override` (from the command line) wins over both.
pub fn init(config: &LoggingConfig, level_override: Option<&str>) -> Result<()> {
    let env_filter = match level_override {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?,
    };

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .with_target(true)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .try_init(),
    };
    result.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    tracing::debug!(
        "Logging configured: level={}, format={}",
        level_override.unwrap_or(&config.level),
        config.format
    );
    Ok(())
}
