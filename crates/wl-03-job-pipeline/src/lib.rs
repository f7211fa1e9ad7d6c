//! # Whitelist Job Pipeline (wl-03)
//!
//! Turns a batch of `address:votingPower` entries into a persisted Merkle
//! root and serves inclusion proofs from stored trees.
//!
//! ## Job Lifecycle
//!
//! ```text
//! submit() ──validate──► insert_pending ──spawn──► execute()
//!    │                                               │
//!    └── returns JobId immediately                   ├─ build tree (wl-01 + wl-02)
//!                                                    └─ commit_processed (atomic)
//!                                                         ├─ job.processed = true, job.root = root
//!                                                         └─ trees[root] = blob (insert-if-absent)
//! ```
//!
//! A job moves `Pending -> Processed` exactly once. A failed build or commit
//! is logged and counted, never written back, so the job stays `Pending`.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain** (`domain/`): entry parsing, leaf sets, job records, errors
//! - **Ports** (`ports/`): `WhitelistApi` (driving), `WhitelistStore` and
//!   `JobObserver` (driven)
//! - **Adapters** (`adapters/`): in-memory store
//! - **Service** (`service.rs`): `WhitelistService` wiring it together

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryWhitelistStore;
pub use domain::{Entry, ErrorKind, JobId, JobRecord, LeafSet, PipelineError};
pub use ports::{
    JobObserver, NoopObserver, StoreError, TreeWrite, WhitelistApi, WhitelistStore,
};
pub use service::WhitelistService;
