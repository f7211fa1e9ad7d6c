//! # Adapter Implementations
//!
//! Concrete implementations of the pipeline's outbound ports.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 OUTER LAYER (Adapters)                   │
//! │   PrometheusObserver          RocksDbWhitelistStore      │
//! │            ↓ implements ↓                                │
//! │   JobObserver                 WhitelistStore             │
//! │                 (wl-03-job-pipeline ports)               │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod metrics_observer;
pub mod storage;

pub use metrics_observer::PrometheusObserver;
