//! # Service Wiring
//!
//! Opens the configured store, builds the pipeline service on top of it with
//! the Prometheus observer, and hands it to the RPC server.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use wl_03_job_pipeline::{InMemoryWhitelistStore, JobObserver, WhitelistApi, WhitelistService};
use wl_04_rpc_gateway::RpcServer;

use crate::adapters::PrometheusObserver;
use crate::container::config::{NodeConfig, StorageBackend};

/// Fully wired whitelist server.
pub struct WhitelistNode {
    config: NodeConfig,
    api: Arc<dyn WhitelistApi>,
}

impl WhitelistNode {
    /// Validate `config` and open the selected store.
    pub fn build(config: NodeConfig) -> Result<Self> {
        config.validate().context("Invalid node configuration")?;

        let observer: Arc<dyn JobObserver> = Arc::new(PrometheusObserver);
        let api = open_api(&config, observer)?;

        info!(
            backend = %config.storage.backend,
            addr = %config.gateway.http_addr(),
            "Whitelist node initialized"
        );

        Ok(Self { config, api })
    }

    /// The query/submit surface, for in-process callers.
    pub fn api(&self) -> Arc<dyn WhitelistApi> {
        Arc::clone(&self.api)
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Serve RPC until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let server = RpcServer::new(self.config.gateway.clone(), self.api)
            .context("Failed to create RPC server")?;
        server.serve(shutdown).await.context("RPC server failed")?;
        Ok(())
    }
}

fn open_api(config: &NodeConfig, observer: Arc<dyn JobObserver>) -> Result<Arc<dyn WhitelistApi>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            let store = Arc::new(InMemoryWhitelistStore::new());
            Ok(Arc::new(WhitelistService::with_observer(store, observer)))
        }
        #[cfg(feature = "rocksdb")]
        StorageBackend::RocksDb => {
            use crate::adapters::storage::{RocksDbConfig, RocksDbWhitelistStore};

            let rocks = RocksDbConfig {
                path: config.storage.data_dir.clone(),
                sync_writes: config.storage.sync_writes,
                ..Default::default()
            };
            let store = RocksDbWhitelistStore::open(rocks).with_context(|| {
                format!("Failed to open RocksDB at {}", config.storage.data_dir.display())
            })?;
            Ok(Arc::new(WhitelistService::with_observer(Arc::new(store), observer)))
        }
        #[cfg(not(feature = "rocksdb"))]
        StorageBackend::RocksDb => Err(crate::container::ConfigError::RocksDbUnavailable.into()),
    }
}
