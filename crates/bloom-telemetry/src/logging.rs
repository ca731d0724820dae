//! Structured logging via `tracing-subscriber`.
//!
//! Two output shapes are supported:
//! - pretty, human-oriented lines for local runs
//! - JSON lines with `target`, `file` and `line` fields for log shippers

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Handle returned once the global subscriber is installed.
#[derive(Debug)]
pub struct LoggingHandle {
    service_name: String,
    json: bool,
}

impl LoggingHandle {
    /// Service name the subscriber was configured for.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Whether JSON output is active.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Build the `EnvFilter`, preferring `RUST_LOG` when it parses.
fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global `tracing` subscriber.
///
/// Fails with [`TelemetryError::LoggingInit`] if a global subscriber has
/// already been set.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingHandle, TelemetryError> {
    let filter = env_filter(config)?;

    if config.json_logs {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        if config.console_output {
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(true);

        if config.console_output {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .try_init()
                .map_err(|e| TelemetryError::LoggingInit(e.to_string()))?;
        }
    }

    tracing::info!(
        service = %config.service_name,
        json = config.json_logs,
        "Structured logging initialized"
    );

    Ok(LoggingHandle {
        service_name: config.service_name.clone(),
        json: config.json_logs,
    })
}
