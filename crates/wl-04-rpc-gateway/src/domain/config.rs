//! Gateway configuration with validation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub cors: CorsConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            cors: CorsConfig::default(),
        }
    }
}

impl GatewayConfig {
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cors.allow_any && self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::NoCorsOrigins);
        }
        for origin in &self.cors.allowed_origins {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::InvalidOrigin(origin.clone()));
            }
        }
        Ok(())
    }
}

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Accept any origin, method and header.
    pub allow_any: bool,
    /// Explicit origins when `allow_any` is off.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any: true,
            allowed_origins: Vec::new(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("CORS is restricted but no origins are allowed")]
    NoCorsOrigins,

    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
