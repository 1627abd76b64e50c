//! Prometheus metrics for the Lisk Nano host.
//!
//! All metrics follow the naming convention: `ln_<area>_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // SHELL
    // =========================================================================

    /// Deep links received from the OS (argv, open-url, second instance)
    pub static ref DEEP_LINKS_RECEIVED: CounterVec = CounterVec::new(
        Opts::new("ln_shell_deep_links_received_total", "Deep links received from the OS"),
        &["source"]  // source: argv/open_url/second_instance
    ).expect("metric creation failed");

    /// Update checks by outcome
    pub static ref UPDATE_CHECKS: CounterVec = CounterVec::new(
        Opts::new("ln_shell_update_checks_total", "Auto-update checks"),
        &["outcome"]  // outcome: up_to_date/deferred/installing/failed
    ).expect("metric creation failed");

    /// Proxy authentication challenges forwarded to the UI
    pub static ref PROXY_LOGINS: Counter = Counter::new(
        "ln_shell_proxy_logins_total",
        "Proxy authentication challenges forwarded to the UI"
    ).expect("metric creation failed");

    // =========================================================================
    // EVENT ROUTER
    // =========================================================================

    /// Routed events by kind and outcome
    pub static ref ROUTED_EVENTS: CounterVec = CounterVec::new(
        Opts::new("ln_router_events_total", "Events routed to the render surface"),
        &["kind", "outcome"]  // outcome: queued/delivered/dropped
    ).expect("metric creation failed");

    // =========================================================================
    // VOTE CONFIRMATION
    // =========================================================================

    /// Vote submissions by outcome
    pub static ref VOTE_SUBMISSIONS: CounterVec = CounterVec::new(
        Opts::new("ln_vote_submissions_total", "Vote confirmations by outcome"),
        &["outcome"]  // outcome: confirmed/failed/refused
    ).expect("metric creation failed");

    /// Round-trip time of the delegate API vote call
    pub static ref VOTE_SUBMISSION_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "ln_vote_submission_duration_seconds",
            "Time spent waiting for the delegate API"
        ).buckets(exponential_buckets(0.01, 2.0, 12).expect("bucket layout is valid"))
    ).expect("metric creation failed");
}

/// Handle for the metrics registry
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
///
/// Safe to call more than once: already registered collectors are skipped.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Shell
        Box::new(DEEP_LINKS_RECEIVED.clone()),
        Box::new(UPDATE_CHECKS.clone()),
        Box::new(PROXY_LOGINS.clone()),
        // Router
        Box::new(ROUTED_EVENTS.clone()),
        // Votes
        Box::new(VOTE_SUBMISSIONS.clone()),
        Box::new(VOTE_SUBMISSION_DURATION.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing for a histogram. Observation happens on drop.
#[macro_export]
macro_rules! time_histogram {
    ($histogram:expr) => {
        $crate::metrics::HistogramTimer::new(&$histogram)
    };
}
