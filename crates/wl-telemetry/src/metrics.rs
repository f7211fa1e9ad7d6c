//! Prometheus metrics for the whitelist service.
//!
//! All metrics follow the naming convention: `wl_<metric>_<unit>`

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Histogram, HistogramOpts, Opts, Registry,
    TextEncoder,
};

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // JOB METRICS
    // =========================================================================

    /// Jobs accepted, by network
    pub static ref JOBS_SUBMITTED: CounterVec = CounterVec::new(
        Opts::new("wl_jobs_submitted_total", "Whitelist jobs accepted for processing"),
        &["network"]
    ).expect("metric creation failed");

    /// Jobs whose root was committed, by network
    pub static ref JOBS_PROCESSED: CounterVec = CounterVec::new(
        Opts::new("wl_jobs_processed_total", "Whitelist jobs committed with a root"),
        &["network"]
    ).expect("metric creation failed");

    /// Jobs that failed in the background and stay pending, by network
    pub static ref JOBS_FAILED: CounterVec = CounterVec::new(
        Opts::new("wl_jobs_failed_total", "Whitelist jobs that failed after submission"),
        &["network"]
    ).expect("metric creation failed");

    // =========================================================================
    // TREE METRICS
    // =========================================================================

    /// Tree construction time
    pub static ref TREE_BUILD_DURATION: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "wl_tree_build_duration_seconds",
            "Time spent hashing leaves and building a Merkle tree"
        ).buckets(exponential_buckets(0.0001, 2.0, 16).expect("valid buckets"))
    ).expect("metric creation failed");

    /// Leaves per built tree
    pub static ref TREE_LEAVES: Histogram = Histogram::with_opts(
        HistogramOpts::new("wl_tree_leaves", "Number of leaves per built tree")
            .buckets(exponential_buckets(1.0, 4.0, 10).expect("valid buckets"))
    ).expect("metric creation failed");

    // =========================================================================
    // QUERY METRICS
    // =========================================================================

    pub static ref PROOFS_SERVED: Counter = Counter::new(
        "wl_proofs_served_total",
        "Merkle proofs returned to callers"
    ).expect("metric creation failed");
}

/// Register all metrics with the global registry. Safe to call repeatedly.
pub fn register_metrics() -> Result<(), TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        Box::new(JOBS_SUBMITTED.clone()),
        Box::new(JOBS_PROCESSED.clone()),
        Box::new(JOBS_FAILED.clone()),
        Box::new(TREE_BUILD_DURATION.clone()),
        Box::new(TREE_LEAVES.clone()),
        Box::new(PROOFS_SERVED.clone()),
    ];

    for metric in metrics {
        match REGISTRY.register(metric) {
            Ok(()) | Err(prometheus::Error::AlreadyReg) => {}
            Err(e) => return Err(TelemetryError::MetricsInit(e.to_string())),
        }
    }
    Ok(())
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
