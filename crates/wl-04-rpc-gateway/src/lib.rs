//! # Whitelist RPC Gateway (wl-04)
//!
//! HTTP front door for the whitelist pipeline.
//!
//! ## Endpoints
//!
//! | Route | Purpose |
//! |-------|---------|
//! | `POST /` | `{"method": ..., "params": {...}}` envelope |
//! | `GET /health` | liveness |
//! | `GET /metrics` | Prometheus text format |
//!
//! ## Methods
//!
//! | Method | Params | Result |
//! |--------|--------|--------|
//! | `generateMerkleTree` | `{network, entries}` | job id |
//! | `getMerkleRoot` | `{requestId}` | hex root or `null` |
//! | `getMerkleProof` | `{root, index}` | array of hex strings |
//!
//! Successful calls answer `{"result": ...}`; failures answer
//! `{"error": "<message>"}` with status 400 (unparsable body), 404 (unknown
//! method) or 500 (anything else).

pub mod domain;
pub mod middleware;
pub mod rpc;
pub mod service;

pub use domain::config::{CorsConfig, GatewayConfig};
pub use domain::error::{ApiError, ApiResult, GatewayError};
pub use service::{build_router, RpcServer};
