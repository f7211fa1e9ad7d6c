//! Job lifecycle metrics backed by the `wl-telemetry` Prometheus registry.

use std::time::Duration;

use shared_types::Network;
use wl_03_job_pipeline::JobObserver;
use wl_telemetry::{
    JOBS_FAILED, JOBS_PROCESSED, JOBS_SUBMITTED, PROOFS_SERVED, TREE_BUILD_DURATION, TREE_LEAVES,
};

/// [`JobObserver`] that updates the process-wide Prometheus metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusObserver;

impl JobObserver for PrometheusObserver {
    fn job_submitted(&self, network: Network) {
        JOBS_SUBMITTED.with_label_values(&[network.as_str()]).inc();
    }

    fn job_processed(&self, network: Network, leaves: usize, build_time: Duration) {
        JOBS_PROCESSED.with_label_values(&[network.as_str()]).inc();
        TREE_LEAVES.observe(leaves as f64);
        TREE_BUILD_DURATION.observe(build_time.as_secs_f64());
    }

    fn job_failed(&self, network: Network) {
        JOBS_FAILED.with_label_values(&[network.as_str()]).inc();
    }

    fn proof_served(&self) {
        PROOFS_SERVED.inc();
    }
}
