//! # In-Memory Store
//!
//! Both tables behind one `RwLock`; holding the write lock for the whole
//! commit makes it atomic. Used by tests and the `memory` storage backend.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::FieldValue;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::{JobId, JobRecord};
use crate::ports::outbound::{StoreError, TreeWrite, WhitelistStore};

#[derive(Default)]
struct Tables {
    jobs: HashMap<JobId, JobRecord>,
    trees: HashMap<String, Vec<u8>>,
}

/// In-memory [`WhitelistStore`].
#[derive(Default)]
pub struct InMemoryWhitelistStore {
    tables: RwLock<Tables>,
    /// When set, every write fails with `StoreError::Backend`.
    fail_writes: AtomicBool,
}

impl InMemoryWhitelistStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn job_count(&self) -> usize {
        self.tables.read().jobs.len()
    }

    pub fn tree_count(&self) -> usize {
        self.tables.read().trees.len()
    }

    /// Store a raw tree blob directly, bypassing the job table.
    pub fn put_tree(&self, root: &FieldValue, tree: Vec<u8>) {
        self.tables.write().trees.insert(root.to_hex_string(), tree);
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Backend {
                message: "write rejected (injected failure)".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WhitelistStore for InMemoryWhitelistStore {
    async fn insert_pending(&self, job: &JobRecord) -> Result<(), StoreError> {
        self.check_writable()?;
        let mut tables = self.tables.write();
        if tables.jobs.contains_key(&job.id) {
            return Err(StoreError::DuplicateJob { id: job.id });
        }
        tables.jobs.insert(job.id, job.clone());
        Ok(())
    }

    async fn find_job(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError> {
        Ok(self.tables.read().jobs.get(id).cloned())
    }

    async fn commit_processed(
        &self,
        id: &JobId,
        root: &FieldValue,
        tree: &[u8],
    ) -> Result<TreeWrite, StoreError> {
        self.check_writable()?;
        let mut tables = self.tables.write();

        let job = tables
            .jobs
            .get_mut(id)
            .ok_or(StoreError::JobMissing { id: *id })?;
        if !job.mark_processed(*root) {
            return Err(StoreError::AlreadyProcessed { id: *id });
        }

        let key = root.to_hex_string();
        if tables.trees.contains_key(&key) {
            return Ok(TreeWrite::AlreadyPresent);
        }
        tables.trees.insert(key, tree.to_vec());
        Ok(TreeWrite::Inserted)
    }

    async fn find_tree(&self, root: &FieldValue) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.tables.read().trees.get(&root.to_hex_string()).cloned())
    }
}
