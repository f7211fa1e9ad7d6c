//! # Production Storage Adapters
//!
//! Durable [`WhitelistStore`](wl_03_job_pipeline::WhitelistStore) backends.
//!
//! ## Usage
//!
//! Enable the `rocksdb` feature to use these adapters:
//!
//! ```toml
//! node-runtime = { path = "...", features = ["rocksdb"] }
//! ```
//!
//! Jobs and trees live in separate column families.

#[cfg(feature = "rocksdb")]
pub mod rocksdb_adapter;

#[cfg(feature = "rocksdb")]
pub use rocksdb_adapter::{
    RocksDbConfig, RocksDbWhitelistStore, CF_JOBS, CF_TREES, COLUMN_FAMILIES,
};
