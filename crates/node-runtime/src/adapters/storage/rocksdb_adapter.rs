//! # RocksDB Storage Adapter
//!
//! Durable implementation of the pipeline's `WhitelistStore` port.
//!
//! ## Column Families
//!
//! - `jobs` - job id (hyphenated UUID) → JSON `JobRecord`
//! - `trees` - canonical root hex → serialized tree
//!
//! ## Commit
//!
//! `commit_processed` reads the job and the tree key, then writes the updated
//! job and (when absent) the tree in one `WriteBatch`. A process-local mutex
//! serializes commits so the read-check-write sequence cannot interleave.

use std::path::PathBuf;

use async_trait::async_trait;
use parking_lot::Mutex;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, Options, WriteBatch, WriteOptions, DB};
use shared_types::FieldValue;
use wl_03_job_pipeline::{JobId, JobRecord, StoreError, TreeWrite, WhitelistStore};

/// Column family names
pub const CF_JOBS: &str = "jobs";
pub const CF_TREES: &str = "trees";

/// All column families used by the store
pub const COLUMN_FAMILIES: &[&str] = &[CF_JOBS, CF_TREES];

/// RocksDB configuration
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: PathBuf,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 16MB)
    pub write_buffer_size: usize,
    /// fsync after each write (default: true)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/whitelist"),
            block_cache_size: 64 * 1024 * 1024,
            write_buffer_size: 16 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Create config for testing (smaller buffers, no sync)
    pub fn for_testing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,
            write_buffer_size: 4 * 1024 * 1024,
            sync_writes: false,
        }
    }
}

/// RocksDB-backed [`WhitelistStore`].
pub struct RocksDbWhitelistStore {
    db: DB,
    commit_lock: Mutex<()>,
    config: RocksDbConfig,
}

impl RocksDbWhitelistStore {
    /// Open or create the database with both column families.
    pub fn open(config: RocksDbConfig) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let cf_descriptors: Vec<ColumnFamilyDescriptor> = COLUMN_FAMILIES
            .iter()
            .map(|name| {
                let mut cf_opts = Options::default();
                cf_opts.set_compression_type(rocksdb::DBCompressionType::Snappy);
                ColumnFamilyDescriptor::new(*name, cf_opts)
            })
            .collect();

        let db = DB::open_cf_descriptors(&opts, &config.path, cf_descriptors)
            .map_err(|e| backend("open", e))?;

        Ok(Self {
            db,
            commit_lock: Mutex::new(()),
            config,
        })
    }

    pub fn config(&self) -> &RocksDbConfig {
        &self.config
    }

    fn cf(&self, name: &str) -> Result<&ColumnFamily, StoreError> {
        self.db.cf_handle(name).ok_or_else(|| StoreError::Backend {
            message: format!("missing column family '{name}'"),
        })
    }

    fn write_opts(&self) -> WriteOptions {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        write_opts
    }

    fn read_job(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError> {
        let cf = self.cf(CF_JOBS)?;
        let Some(bytes) = self
            .db
            .get_cf(&cf, id.to_string().as_bytes())
            .map_err(|e| backend("get", e))?
        else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                message: format!("job {id}: {e}"),
            })
    }
}

#[async_trait]
impl WhitelistStore for RocksDbWhitelistStore {
    async fn insert_pending(&self, job: &JobRecord) -> Result<(), StoreError> {
        let _guard = self.commit_lock.lock();
        if self.read_job(&job.id)?.is_some() {
            return Err(StoreError::DuplicateJob { id: job.id });
        }

        let value = encode_job(job)?;
        let cf = self.cf(CF_JOBS)?;
        self.db
            .put_cf_opt(&cf, job.id.to_string().as_bytes(), value, &self.write_opts())
            .map_err(|e| backend("put", e))
    }

    async fn find_job(&self, id: &JobId) -> Result<Option<JobRecord>, StoreError> {
        self.read_job(id)
    }

    async fn commit_processed(
        &self,
        id: &JobId,
        root: &FieldValue,
        tree: &[u8],
    ) -> Result<TreeWrite, StoreError> {
        let _guard = self.commit_lock.lock();

        let mut job = self
            .read_job(id)?
            .ok_or(StoreError::JobMissing { id: *id })?;
        if !job.mark_processed(*root) {
            return Err(StoreError::AlreadyProcessed { id: *id });
        }

        let jobs = self.cf(CF_JOBS)?;
        let trees = self.cf(CF_TREES)?;
        let tree_key = root.to_hex_string();
        let exists = self
            .db
            .get_pinned_cf(&trees, tree_key.as_bytes())
            .map_err(|e| backend("get", e))?
            .is_some();

        let mut batch = WriteBatch::default();
        batch.put_cf(&jobs, id.to_string().as_bytes(), encode_job(&job)?);
        if !exists {
            batch.put_cf(&trees, tree_key.as_bytes(), tree);
        }
        self.db
            .write_opt(batch, &self.write_opts())
            .map_err(|e| backend("batch write", e))?;

        Ok(if exists {
            TreeWrite::AlreadyPresent
        } else {
            TreeWrite::Inserted
        })
    }

    async fn find_tree(&self, root: &FieldValue) -> Result<Option<Vec<u8>>, StoreError> {
        let cf = self.cf(CF_TREES)?;
        self.db
            .get_cf(&cf, root.to_hex_string().as_bytes())
            .map_err(|e| backend("get", e))
    }
}

fn encode_job(job: &JobRecord) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec(job).map_err(|e| StoreError::Corrupt {
        message: format!("job {}: {e}", job.id),
    })
}

fn backend(operation: &str, e: rocksdb::Error) -> StoreError {
    StoreError::Backend {
        message: format!("RocksDB {operation} failed: {e}"),
    }
}
