//! Logging initialization

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Errors from installing the global subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already set
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Resolve the filter directive, `RUST_LOG` taking precedence
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Install the global `tracing` subscriber
///
/// `override_filter` (e.g. from CLI verbosity flags) replaces the configured
/// filter; `RUST_LOG` still wins over both. Logs go to stderr so stdout stays
/// free for command output.
pub fn init_logging(
    config: &LoggingConfig,
    override_filter: Option<&str>,
) -> Result<(), TelemetryError> {
    let filter = build_filter(override_filter.unwrap_or(&config.filter));

    let result = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}
