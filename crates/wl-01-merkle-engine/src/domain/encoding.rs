//! # Tree Wire Format
//!
//! Trees are persisted as JSON:
//!
//! ```json
//! {"hashes": ["0x...", ...], "tree_indices": {"0": 4, "1": 3, "2": 2}}
//! ```
//!
//! Older records are a bare array of hex strings with no index map; for those
//! ordinal `i` is implied to sit at `len - 1 - i`. Decoding accepts both,
//! encoding always writes the object form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::FieldValue;

use super::errors::MerkleError;
use super::tree::MerkleTree;

/// The object form written to storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedTree {
    pub hashes: Vec<FieldValue>,
    pub tree_indices: BTreeMap<usize, usize>,
}

impl From<&MerkleTree> for EncodedTree {
    fn from(tree: &MerkleTree) -> Self {
        Self {
            hashes: tree.hashes.clone(),
            tree_indices: tree.tree_indices.clone(),
        }
    }
}

impl TryFrom<EncodedTree> for MerkleTree {
    type Error = MerkleError;

    fn try_from(encoded: EncodedTree) -> Result<Self, Self::Error> {
        let len = encoded.hashes.len();
        if len == 0 {
            return Err(MerkleError::encoding("tree has no nodes"));
        }
        if len % 2 == 0 {
            return Err(MerkleError::encoding(format!(
                "node count {len} is not of the form 2n - 1"
            )));
        }

        let leaf_start = len - (len + 1) / 2;
        for (ordinal, index) in &encoded.tree_indices {
            if *index < leaf_start || *index >= len {
                return Err(MerkleError::encoding(format!(
                    "ordinal {ordinal} maps to {index}, outside leaf region {leaf_start}..{len}"
                )));
            }
        }

        Ok(Self {
            hashes: encoded.hashes,
            tree_indices: encoded.tree_indices,
        })
    }
}

impl MerkleTree {
    /// Serialize to the object wire form.
    pub fn to_json(&self) -> Result<Vec<u8>, MerkleError> {
        serde_json::to_vec(&EncodedTree::from(self))
            .map_err(|e| MerkleError::encoding(e.to_string()))
    }

    /// Decode either wire form.
    ///
    /// ## Errors
    ///
    /// - `InvalidEncoding`: malformed JSON, a non-hex value, or a shape that
    ///   is not a tree
    pub fn from_json(bytes: &[u8]) -> Result<Self, MerkleError> {
        let first = bytes.iter().find(|b| !b.is_ascii_whitespace());

        let encoded = if first == Some(&b'[') {
            let hashes: Vec<FieldValue> = serde_json::from_slice(bytes)
                .map_err(|e| MerkleError::encoding(e.to_string()))?;
            legacy_indices(hashes)
        } else {
            serde_json::from_slice::<EncodedTree>(bytes)
                .map_err(|e| MerkleError::encoding(e.to_string()))?
        };

        Self::try_from(encoded)
    }
}

fn legacy_indices(hashes: Vec<FieldValue>) -> EncodedTree {
    let len = hashes.len();
    let leaf_count = (len + 1) / 2;
    let tree_indices = (0..leaf_count).map(|i| (i, len - 1 - i)).collect();
    EncodedTree {
        hashes,
        tree_indices,
    }
}
