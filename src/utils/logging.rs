//! Logging initialisation

use crate::config::models::{LogFormat, LoggingConfig};
use crate::utils::error::{OpsError, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "OPSDESK_LOG";

/// Build the filter: `OPSDESK_LOG` if set, otherwise the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| OpsError::config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global tracing subscriber.
///
/// Output goes to stderr so command output on stdout stays machine-readable.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| OpsError::internal(format!("Failed to initialise logging: {}", e)))
}
