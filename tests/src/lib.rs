//! # Merkle Whitelist Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (tree build, proofs, hashers)
//! └── src/integration/  # Cross-crate flows
//!     ├── pipeline_flows.rs   # node wiring → pipeline → store
//!     └── rpc_flows.rs        # JSON-RPC over the axum router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p wl-tests
//!
//! # By category
//! cargo test -p wl-tests integration::rpc_flows
//!
//! # Benchmarks
//! cargo bench -p wl-tests
//! ```

pub mod integration;
