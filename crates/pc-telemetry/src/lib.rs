//! # Property-Chain Telemetry
//!
//! Process-wide observability setup for hosts embedding the property
//! registry.
//!
//! ## Components
//!
//! - **Logging**: `tracing` subscriber with an env filter, pretty or JSON
//! - **Metrics**: text exposition of everything registered with the default
//!   Prometheus registry (the registry crate's `metrics` feature)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pc_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env()?;
//! let _guard = init_telemetry(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `PC_JSON_LOGS` | `false` | Emit JSON log lines |
//! | `PC_SERVICE_NAME` | `property-chain` | Service name on every log line |

mod config;
mod logging;
mod metrics;

pub use config::TelemetryConfig;
pub use logging::init_logging;
pub use metrics::encode_metrics;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize logging: {0}")]
    LoggingInit(String),

    #[error("Failed to encode Prometheus metrics: {0}")]
    MetricsEncode(String),

    #[error("Invalid configuration: {variable}={value}: {reason}")]
    Config {
        variable: &'static str,
        value: String,
        reason: String,
    },
}

/// Initialize process-wide telemetry.
///
/// Returns a guard to hold for the lifetime of the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    init_logging(config)?;
    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
