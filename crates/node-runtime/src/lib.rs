//! # Node Runtime Library
//!
//! This library exposes the internal modules of the whitelist server for
//! testing. The main entry point is the `main.rs` binary.
//!
//! ## Modules
//!
//! - `container/` - Configuration and service wiring
//! - `adapters/` - Port implementations (metrics observer, RocksDB store)

pub mod adapters;
pub mod container;

pub use container::{ConfigError, NodeConfig, StorageBackend, WhitelistNode};
