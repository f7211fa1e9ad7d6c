//! # Node Configuration
//!
//! Unified configuration for the gateway, storage and telemetry, loaded from
//! `WL_*` environment variables.
//!
//! Unparseable values are logged and replaced with the default rather than
//! aborting startup. Call [`NodeConfig::validate`] before wiring.

use std::env;
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;
use wl_04_rpc_gateway::GatewayConfig;
use wl_telemetry::TelemetryConfig;

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeConfig {
    /// RPC listener and CORS.
    pub gateway: GatewayConfig,
    /// Storage backend selection.
    pub storage: StorageConfig,
    /// Log output.
    pub telemetry: TelemetryConfig,
}

/// Where jobs and trees are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process memory; lost on restart.
    #[default]
    Memory,
    /// RocksDB under `StorageConfig::data_dir`.
    RocksDb,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::RocksDb => "rocksdb",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "rocksdb" => Ok(StorageBackend::RocksDb),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// RocksDB directory.
    pub data_dir: PathBuf,
    /// fsync every commit.
    pub sync_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data/whitelist"),
            sync_writes: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown storage backend '{0}' (expected 'memory' or 'rocksdb')")]
    UnknownBackend(String),

    #[error("storage backend 'rocksdb' requires building with the `rocksdb` feature")]
    RocksDbUnavailable,

    #[error("invalid gateway configuration: {0}")]
    Gateway(String),
}

impl NodeConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = NodeConfig {
            telemetry: TelemetryConfig::from_lookup(&lookup),
            ..Default::default()
        };

        if let Some(host) = parse_var::<IpAddr, _>(&lookup, "WL_RPC_HOST") {
            config.gateway.host = host;
        }
        if let Some(port) = parse_var::<u16, _>(&lookup, "WL_RPC_PORT") {
            config.gateway.port = port;
        }
        if let Some(allow_any) = parse_flag(&lookup, "WL_CORS_ALLOW_ANY") {
            config.gateway.cors.allow_any = allow_any;
        }
        if let Some(origins) = lookup("WL_CORS_ORIGINS") {
            config.gateway.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(backend) = parse_var::<StorageBackend, _>(&lookup, "WL_STORAGE_BACKEND") {
            config.storage.backend = backend;
        }
        if let Some(dir) = lookup("WL_DATA_DIR").filter(|d| !d.is_empty()) {
            config.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(sync) = parse_flag(&lookup, "WL_SYNC_WRITES") {
            config.storage.sync_writes = sync;
        }

        config
    }

    /// Check the configuration can be served by this build.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gateway
            .validate()
            .map_err(|e| ConfigError::Gateway(e.to_string()))?;

        if self.storage.backend == StorageBackend::RocksDb && !cfg!(feature = "rocksdb") {
            return Err(ConfigError::RocksDbUnavailable);
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(variable = key, value = %raw, error = %e, "Ignoring invalid value, using default");
            None
        }
    }
}

fn parse_flag<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => {
            warn!(variable = key, value = %raw, "Ignoring invalid flag, using default");
            None
        }
    }
}
