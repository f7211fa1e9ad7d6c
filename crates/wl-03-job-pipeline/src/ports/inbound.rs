//! # Inbound Ports (Driving)

use async_trait::async_trait;
use shared_types::FieldValue;

use crate::domain::{JobId, PipelineError};

/// Whitelist operations exposed to the outside world.
#[async_trait]
pub trait WhitelistApi: Send + Sync {
    /// Validate a batch, record it as pending, and start building its tree
    /// in the background.
    ///
    /// ## Returns
    ///
    /// The new job's id, before the tree exists.
    ///
    /// ## Errors
    ///
    /// - Validation errors (empty batch, bad entry, unknown network)
    /// - `Store` if the pending record could not be written
    async fn submit(&self, network: &str, entries: Vec<String>) -> Result<JobId, PipelineError>;

    /// Root of a finished job.
    ///
    /// ## Returns
    ///
    /// - `Ok(Some(root))`: the job has been processed
    /// - `Ok(None)`: the job exists but is still pending
    async fn get_root(&self, request_id: &str) -> Result<Option<FieldValue>, PipelineError>;

    /// Inclusion proof for the entry at `index` of the batch that produced
    /// `root`.
    async fn get_proof(&self, root: &str, index: i64) -> Result<Vec<FieldValue>, PipelineError>;
}
