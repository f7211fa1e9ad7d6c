//! # Chain Hasher Port
//!
//! The capability a chain family plugs into the engine.

use shared_types::FieldValue;

/// Leaf and node hashing rules for one target chain.
///
/// ## Contract
///
/// `node_hash` MUST be order-independent: `node_hash(a, b) == node_hash(b, a)`.
/// Verifiers fold a proof without knowing which side each sibling sat on, so
/// the hasher fixes the concatenation order from the values themselves.
pub trait ChainHasher: Send + Sync {
    /// Chain-specific leaf record.
    type Leaf;

    /// Hash one whitelist entry.
    fn leaf_hash(&self, leaf: &Self::Leaf) -> FieldValue;

    /// Combine two child values into their parent.
    fn node_hash(&self, a: &FieldValue, b: &FieldValue) -> FieldValue;
}
