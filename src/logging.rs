//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the level passed in.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogFormat;
use crate::error::ShelfError;

/// Install the global subscriber. Call once, before any tracing macros.
pub fn init_tracing(format: LogFormat, level: &str) -> Result<(), ShelfError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
    };

    result.map_err(|e| ShelfError::Config(format!("failed to initialize tracing: {}", e)))
}
