//! # Node Container
//!
//! Configuration plus the wiring that turns it into a running server.

pub mod config;
pub mod node;

pub use config::{ConfigError, NodeConfig, StorageBackend, StorageConfig};
pub use node::WhitelistNode;
