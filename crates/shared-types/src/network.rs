//! # Network
//!
//! Target chain family of a whitelist job. Selects the chain hasher and the
//! leaf ordering policy expected by that chain's on-chain verifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownNetwork;

/// Supported chain families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Keccak-256 byte hashing, sorted leaves.
    Evm,
    /// Pedersen field hashing, leaves kept in submission order.
    Starknet,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Evm, Network::Starknet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Evm => "evm",
            Network::Starknet => "starknet",
        }
    }

    /// Whether leaves are sorted by hash before the tree is laid out.
    pub fn sorts_leaves(&self) -> bool {
        matches!(self, Network::Evm)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "evm" => Ok(Network::Evm),
            "starknet" => Ok(Network::Starknet),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}
