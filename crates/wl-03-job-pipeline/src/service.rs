//! # Whitelist Service
//!
//! Implements [`WhitelistApi`] over an injected [`WhitelistStore`].
//!
//! Each accepted submission gets its own unsupervised tokio task. There is no
//! pool, queue, retry, or cancellation; the store is the only shared state
//! between the request path and the workers.

use async_trait::async_trait;
use shared_types::{FieldValue, Network};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};
use wl_01_merkle_engine::{MerkleError, MerkleTree};

use crate::domain::{JobId, JobRecord, LeafSet, PipelineError};
use crate::ports::inbound::WhitelistApi;
use crate::ports::outbound::{JobObserver, NoopObserver, TreeWrite, WhitelistStore};

/// Job pipeline and query service.
pub struct WhitelistService<S: WhitelistStore> {
    store: Arc<S>,
    observer: Arc<dyn JobObserver>,
}

impl<S: WhitelistStore> Clone for WhitelistService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            observer: Arc::clone(&self.observer),
        }
    }
}

impl<S: WhitelistStore + 'static> WhitelistService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_observer(store, Arc::new(NoopObserver))
    }

    pub fn with_observer(store: Arc<S>, observer: Arc<dyn JobObserver>) -> Self {
        Self { store, observer }
    }

    /// Build the tree for a pending job and commit it.
    ///
    /// The job update and tree insert are one store transaction. A tree that
    /// another job already stored under the same root is left as is.
    pub async fn execute(&self, id: JobId, leaves: LeafSet) -> Result<FieldValue, PipelineError> {
        let network = leaves.network();
        info!(job_id = %id, %network, leaves = leaves.len(), "Processing whitelist job");

        let started = Instant::now();
        let tree = leaves.build_tree()?;
        let build_time = started.elapsed();

        let root = tree.root();
        let blob = tree.to_json().map_err(|e| PipelineError::CorruptTree {
            root: root.to_string(),
            reason: e.to_string(),
        })?;

        let write = self.store.commit_processed(&id, &root, &blob).await?;
        self.observer.job_processed(network, leaves.len(), build_time);

        info!(
            job_id = %id,
            %network,
            %root,
            shared_tree = write == TreeWrite::AlreadyPresent,
            build_ms = build_time.as_millis() as u64,
            "Whitelist job processed"
        );
        Ok(root)
    }

    /// Worker body: failures are logged and counted, the job stays pending.
    async fn run(self, id: JobId, leaves: LeafSet) {
        let network = leaves.network();
        if let Err(e) = self.execute(id, leaves).await {
            self.observer.job_failed(network);
            error!(job_id = %id, %network, error = %e, "Error processing whitelist job");
        }
    }
}

#[async_trait]
impl<S: WhitelistStore + 'static> WhitelistApi for WhitelistService<S> {
    async fn submit(&self, network: &str, entries: Vec<String>) -> Result<JobId, PipelineError> {
        if entries.is_empty() {
            return Err(PipelineError::EmptyEntries);
        }
        let network: Network = network
            .parse()
            .map_err(|_| PipelineError::UnsupportedNetwork {
                network: network.to_string(),
            })?;
        let leaves = LeafSet::parse(network, &entries)?;

        let job = JobRecord::pending(JobId::new(), network);
        self.store.insert_pending(&job).await?;
        self.observer.job_submitted(network);
        info!(job_id = %job.id, %network, leaves = leaves.len(), "Whitelist job submitted");

        tokio::spawn(self.clone().run(job.id, leaves));

        Ok(job.id)
    }

    async fn get_root(&self, request_id: &str) -> Result<Option<FieldValue>, PipelineError> {
        if request_id.is_empty() {
            return Err(PipelineError::InvalidRequest {
                reason: "requestId cannot be empty".to_string(),
            });
        }
        let not_found = || PipelineError::JobNotFound {
            id: request_id.to_string(),
        };

        let id: JobId = request_id.parse().map_err(|_| not_found())?;
        let job = self.store.find_job(&id).await?.ok_or_else(not_found)?;

        Ok(job.ready_root())
    }

    async fn get_proof(&self, root: &str, index: i64) -> Result<Vec<FieldValue>, PipelineError> {
        let root_value: FieldValue = root.parse().map_err(|e| PipelineError::InvalidRoot {
            root: root.to_string(),
            reason: format!("{e}"),
        })?;

        let blob = self
            .store
            .find_tree(&root_value)
            .await?
            .ok_or_else(|| PipelineError::TreeNotFound {
                root: root.to_string(),
            })?;

        let corrupt = |e: MerkleError| PipelineError::CorruptTree {
            root: root_value.to_string(),
            reason: e.to_string(),
        };
        let tree = MerkleTree::from_json(&blob).map_err(corrupt)?;

        let ordinal = usize::try_from(index).map_err(|_| PipelineError::NoSuchLeaf { index })?;
        let proof = tree.proof(ordinal).map_err(|e| match e {
            MerkleError::NoSuchLeaf { .. } => PipelineError::NoSuchLeaf { index },
            other => corrupt(other),
        })?;

        self.observer.proof_served();
        debug!(root = %root_value, index, siblings = proof.len(), "Served Merkle proof");
        Ok(proof)
    }
}
