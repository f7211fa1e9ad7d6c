//! # Whitelist Node
//!
//! Entry point for the Merkle whitelist server.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from `WL_*` environment variables
//! 2. Initialize logging and Prometheus metrics
//! 3. Open the selected store and wire the job pipeline
//! 4. Serve JSON-RPC until Ctrl-C, then drain in-flight requests

use anyhow::{Context, Result};
use tracing::{info, warn};

use node_runtime::{NodeConfig, WhitelistNode};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C; shutting down");
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = NodeConfig::from_env();

    let _telemetry = wl_telemetry::init_telemetry(&config.telemetry)
        .context("Failed to initialize telemetry")?;

    info!("===========================================");
    info!("  Merkle Whitelist Node v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let node = WhitelistNode::build(config)?;
    let config = node.config();
    info!("RPC Addr: {}", config.gateway.http_addr());
    info!("Storage:  {}", config.storage.backend);
    info!("Data Dir: {:?}", config.storage.data_dir);

    node.run(shutdown_signal()).await?;

    info!("Node shutdown complete");
    Ok(())
}
