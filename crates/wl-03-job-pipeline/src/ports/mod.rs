//! # Ports Layer
//!
//! - **Driving Port**: [`WhitelistApi`], called by the RPC gateway
//! - **Driven Ports**: [`WhitelistStore`] for durable state,
//!   [`JobObserver`] for metrics

pub mod inbound;
pub mod outbound;

pub use inbound::WhitelistApi;
pub use outbound::{JobObserver, NoopObserver, StoreError, TreeWrite, WhitelistStore};
