//! Tracing subscriber initialisation.

use std::io;

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, Registry,
    filter::ParseError,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::{LogFormat, LoggingConfig};

/// Errors raised while starting the application.
#[derive(Debug, Error)]
pub(crate) enum AppInitError {
    /// The log level is not a valid filter directive.
    #[error("invalid log level: {0}")]
    LogFilter(#[from] ParseError),

    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] TryInitError),
}

/// Installs the global subscriber. Logs go to stderr so command output stays
/// clean.
pub(crate) fn init(config: &LoggingConfig) -> Result<(), AppInitError> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    match config.log_format {
        LogFormat::Compact => init_subscriber(
            filter,
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_writer(io::stderr),
        ),
        LogFormat::Json => init_subscriber(
            filter,
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true)
                .with_writer(io::stderr),
        ),
    }
}

fn init_subscriber<L>(filter: EnvFilter, fmt_layer: L) -> Result<(), AppInitError>
where
    L: Layer<Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_level_is_reported() {
        let config = LoggingConfig {
            log_level: "inventrak=loud".to_string(),
            log_format: LogFormat::Compact,
        };

        let result = init(&config);

        assert!(
            matches!(result, Err(AppInitError::LogFilter(_))),
            "expected a filter error, got {result:?}"
        );
    }
}
