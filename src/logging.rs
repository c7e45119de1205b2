//! Tracing subscriber setup driven by [`LoggingConfig`]

use crate::config::LoggingConfig;
use crate::{PacklistError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set. Installing a
/// second subscriber fails with a configuration error instead of panicking.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| PacklistError::config(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    installed.map_err(|e| PacklistError::config(format!("Failed to install subscriber: {e}")))?;
    tracing::info!(level = %config.level, format = %config.format, "logging initialized");
    Ok(())
}
