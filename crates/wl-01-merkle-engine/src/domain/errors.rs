//! # Domain Errors

use thiserror::Error;

/// Errors raised by tree construction, proof derivation, and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    /// A tree needs at least one leaf.
    #[error("cannot build a Merkle tree from zero leaves")]
    EmptyInput,

    /// The ordinal was never part of the input list.
    #[error("no leaf at ordinal {ordinal}")]
    NoSuchLeaf { ordinal: usize },

    /// Parent/sibling requested for index 0.
    #[error("root node has no {operation}")]
    InvalidRootOperation { operation: &'static str },

    /// Stored payload is not a valid tree.
    #[error("invalid tree encoding: {reason}")]
    InvalidEncoding { reason: String },
}

impl MerkleError {
    pub(crate) fn encoding(reason: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            reason: reason.into(),
        }
    }
}
