//! # Shared Types Crate
//!
//! Value types used across the whitelist subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `FieldValue` is the only node type stored in
//!   a Merkle tree, regardless of which chain hasher produced it.
//! - **Canonical Text Form**: every `FieldValue` crosses a process boundary as
//!   a `0x`-prefixed lowercase hex string with no leading zeros.
//! - **Lenient Input**: numeric literals accept the same base prefixes the
//!   deployed verifier tooling emits (`0x`, `0o`, `0b`, leading `0`, decimal).

pub mod errors;
pub mod field_value;
pub mod literal;
pub mod network;

pub use errors::*;
pub use field_value::FieldValue;
pub use literal::parse_uint_literal;
pub use network::Network;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;
