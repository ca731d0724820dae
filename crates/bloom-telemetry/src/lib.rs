//! # Bloom Telemetry
//!
//! Logging setup shared by the counting Bloom filter binaries and tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bloom_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _handle = init_logging(&config).expect("Failed to init logging");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `CBF_SERVICE_NAME` | `counting-bloom` | Service name in the startup event |
//! | `CBF_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `CBF_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `CBF_JSON_LOGS` | `false` | JSON lines instead of pretty output |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{init_logging, LoggingHandle};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
