//! # Outbound Ports (Driven)
//!
//! Dependencies the pipeline needs from the outside: a durable store and an
//! observer for job metrics.

use async_trait::async_trait;
use shared_types::{FieldValue, Network};
use std::time::Duration;
use thiserror::Error;

use crate::domain::{JobId, JobRecord};

/// Storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("job {id} does not exist")]
    JobMissing { id: JobId },

    #[error("job {id} already exists")]
    DuplicateJob { id: JobId },

    #[error("job {id} has already been processed")]
    AlreadyProcessed { id: JobId },

    #[error("stored record could not be decoded: {message}")]
    Corrupt { message: String },

    #[error("storage backend error: {message}")]
    Backend { message: String },
}

/// Outcome of the tree half of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeWrite {
    /// First job to produce this root.
    Inserted,
    /// Another job already stored this root; nothing written.
    AlreadyPresent,
}

/// Durable job and tree tables.
///
/// Trees are keyed by the root's canonical hex (`FieldValue::to_hex_string`).
#[async_trait]
pub trait WhitelistStore: Send + Sync {
    /// Record a new pending job.
    async fn insert_pending(&self, job: &JobRecord) -> Result<(), StoreError>;

    async fn find_job(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError>;

    /// Mark `id` processed with `root` and store `tree` under `root` unless a
    /// tree is already there. Both writes happen or neither does.
    ///
    /// ## Errors
    ///
    /// - `JobMissing`: no such job
    /// - `AlreadyProcessed`: the job already left `Pending`
    async fn commit_processed(
        &self,
        id: &JobId,
        root: &FieldValue,
        tree: &[u8],
    ) -> Result<TreeWrite, StoreError>;

    /// Serialized tree stored under `root`.
    async fn find_tree(&self, root: &FieldValue) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Hooks for job lifecycle metrics. All methods default to no-ops.
pub trait JobObserver: Send + Sync {
    fn job_submitted(&self, _network: Network) {}

    fn job_processed(&self, _network: Network, _leaves: usize, _build_time: Duration) {}

    fn job_failed(&self, _network: Network) {}

    fn proof_served(&self) {}
}

/// Observer that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl JobObserver for NoopObserver {}
