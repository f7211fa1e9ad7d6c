//! # Whitelist Telemetry
//!
//! Log initialization and Prometheus metrics.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wl_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let _guard = init_telemetry(&TelemetryConfig::from_lookup(|k| std::env::var(k).ok()))?;
//! // ... serve requests; scrape `wl_telemetry::encode_metrics()`
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `WL_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `WL_JSON_LOGS` | `false` | JSON log lines instead of pretty output |
//! | `WL_SERVICE_NAME` | `whitelist-server` | Service name in startup logs |

mod config;
mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, JOBS_FAILED, JOBS_PROCESSED,
    JOBS_SUBMITTED, PROOFS_SERVED, REGISTRY, TREE_BUILD_DURATION, TREE_LEAVES,
};
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize log subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Install the log subscriber and register metrics.
///
/// Returns a guard that logs on shutdown; hold it for the life of the process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    register_metrics()?;
    init_tracing(config)?;

    Ok(TelemetryGuard {
        service_name: config.service_name.clone(),
    })
}

/// Keeps telemetry alive for the process lifetime.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
