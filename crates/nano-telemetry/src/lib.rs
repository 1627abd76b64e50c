//! # Nano Telemetry
//!
//! Observability for the Lisk Nano host process.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Traces**: OpenTelemetry OTLP export, only when an endpoint is configured
//! - **Metrics**: Prometheus counters for deep links, routed events, vote
//!   submissions and update checks
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nano_telemetry::{init_telemetry, TelemetryConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let _guard = init_telemetry(TelemetryConfig::from_env()).await?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_EXPORTER_OTLP_ENDPOINT` | unset | OTLP collector; tracing export is off when unset |
//! | `OTEL_SERVICE_NAME` | `lisk-nano` | Service name in traces |
//! | `LN_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `LN_JSON_LOGS` | `false` | JSON formatted logs |
//! | `LN_CONSOLE_OUTPUT` | `true` | Write logs to stdout |

mod config;
mod logging;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, MetricsHandle, DEEP_LINKS_RECEIVED, PROXY_LOGINS,
    ROUTED_EVENTS, UPDATE_CHECKS, VOTE_SUBMISSIONS, VOTE_SUBMISSION_DURATION,
};
pub use tracing_setup::TracingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize OpenTelemetry tracer: {0}")]
    TracerInit(String),

    #[error("Failed to install log subscriber: {0}")]
    SubscriberInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),
}

/// Initialize logging, optional trace export and metrics.
///
/// Hold the returned guard for the lifetime of the process. Dropping it
/// flushes pending spans.
pub async fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    let metrics_handle = register_metrics()?;
    let tracing_guard = tracing_setup::init_tracing(&config).await?;

    Ok(TelemetryGuard {
        _tracing: tracing_guard,
        _metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active. Drop to flush and shutdown.
pub struct TelemetryGuard {
    _tracing: TracingGuard,
    _metrics: MetricsHandle,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!("Shutting down telemetry...");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_inc_macro() {
        let before = ROUTED_EVENTS.with_label_values(&["focus", "queued"]).get();
        metric_inc!(ROUTED_EVENTS, &["focus", "queued"]);
        assert!(ROUTED_EVENTS.with_label_values(&["focus", "queued"]).get() >= before + 1.0);
    }
}
