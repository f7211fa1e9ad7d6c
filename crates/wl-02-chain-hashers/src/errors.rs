//! # Leaf Errors

use thiserror::Error;

/// A whitelist entry that cannot be turned into a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeafError {
    #[error("invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("voting power {voting_power} does not fit in {max_bits} bits")]
    InvalidVotingPower { voting_power: String, max_bits: usize },
}
