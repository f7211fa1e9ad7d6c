//! # Merkle Tree
//!
//! Flat-array Merkle tree with an ordinal-to-index map.
//!
//! The tree is built bottom-up from `n` leaf hashes into `2n - 1` slots.
//! Leaves fill the tail of the array in reverse order (first leaf at the last
//! slot), internal nodes fill the head, and `hashes[0]` is the root.

use std::collections::BTreeMap;

use shared_types::FieldValue;

use super::errors::MerkleError;
use crate::ports::ChainHasher;

// =============================================================================
// INDEX ARITHMETIC
// =============================================================================

/// Left child of node `i`.
#[inline]
pub fn left_child_index(i: usize) -> usize {
    2 * i + 1
}

/// Right child of node `i`.
#[inline]
pub fn right_child_index(i: usize) -> usize {
    2 * i + 2
}

/// Parent of node `i`. The root has none.
pub fn parent_index(i: usize) -> Result<usize, MerkleError> {
    if i == 0 {
        return Err(MerkleError::InvalidRootOperation {
            operation: "parent",
        });
    }
    Ok((i - 1) / 2)
}

/// Sibling of node `i`. The root has none.
pub fn sibling_index(i: usize) -> Result<usize, MerkleError> {
    if i == 0 {
        return Err(MerkleError::InvalidRootOperation {
            operation: "sibling",
        });
    }
    if i % 2 == 1 {
        Ok(i + 1)
    } else {
        Ok(i - 1)
    }
}

// =============================================================================
// TREE
// =============================================================================

/// An immutable Merkle tree over a non-empty list of leaves.
///
/// ## Invariants
///
/// - `hashes.len() == 2n - 1` where `n` is the leaf count
/// - every value in `tree_indices` lies in the leaf region `[len - n, len)`
/// - `hashes[i] == node_hash(hashes[2i + 1], hashes[2i + 2])` for internal `i`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    /// Flattened node values, root first.
    pub(crate) hashes: Vec<FieldValue>,
    /// Input ordinal -> position in `hashes`.
    pub(crate) tree_indices: BTreeMap<usize, usize>,
}

impl MerkleTree {
    /// Build a tree from chain-specific leaves.
    ///
    /// When `sort_leaves` is set, leaf hashes are ordered ascending before
    /// placement; `tree_indices` still resolves every original ordinal.
    ///
    /// ## Errors
    ///
    /// - `EmptyInput`: `leaves` is empty
    pub fn build<H>(
        leaves: &[H::Leaf],
        hasher: &H,
        sort_leaves: bool,
    ) -> Result<Self, MerkleError>
    where
        H: ChainHasher + ?Sized,
    {
        let leaf_hashes = leaves.iter().map(|leaf| hasher.leaf_hash(leaf)).collect();
        Self::from_leaf_hashes(leaf_hashes, |a, b| hasher.node_hash(a, b), sort_leaves)
    }

    /// Build a tree from precomputed leaf hashes.
    pub fn from_leaf_hashes<F>(
        leaf_hashes: Vec<FieldValue>,
        node_hash: F,
        sort_leaves: bool,
    ) -> Result<Self, MerkleError>
    where
        F: Fn(&FieldValue, &FieldValue) -> FieldValue,
    {
        let leaf_count = leaf_hashes.len();
        if leaf_count == 0 {
            return Err(MerkleError::EmptyInput);
        }

        let mut placed: Vec<(usize, FieldValue)> = leaf_hashes.into_iter().enumerate().collect();
        if sort_leaves {
            // Stable, so equal hashes keep input order.
            placed.sort_by(|a, b| a.1.cmp(&b.1));
        }

        let len = 2 * leaf_count - 1;
        let mut hashes = vec![FieldValue::ZERO; len];
        let mut tree_indices = BTreeMap::new();

        for (position, (ordinal, hash)) in placed.into_iter().enumerate() {
            let tree_index = len - 1 - position;
            hashes[tree_index] = hash;
            tree_indices.insert(ordinal, tree_index);
        }

        for i in (0..len - leaf_count).rev() {
            let parent = node_hash(
                &hashes[left_child_index(i)],
                &hashes[right_child_index(i)],
            );
            hashes[i] = parent;
        }

        Ok(Self {
            hashes,
            tree_indices,
        })
    }

    /// The root value.
    pub fn root(&self) -> FieldValue {
        self.hashes[0]
    }

    /// Sibling values from the leaf at `ordinal` up to (excluding) the root.
    ///
    /// A single-leaf tree yields an empty proof.
    ///
    /// ## Errors
    ///
    /// - `NoSuchLeaf`: `ordinal` was not an input position
    pub fn proof(&self, ordinal: usize) -> Result<Vec<FieldValue>, MerkleError> {
        let mut index = self.tree_index(ordinal)?;
        let mut path = Vec::new();

        while index > 0 {
            path.push(self.hashes[sibling_index(index)?]);
            index = parent_index(index)?;
        }

        Ok(path)
    }

    /// The stored leaf hash for `ordinal`.
    pub fn leaf_hash(&self, ordinal: usize) -> Result<FieldValue, MerkleError> {
        Ok(self.hashes[self.tree_index(ordinal)?])
    }

    /// Array position of the leaf at `ordinal`.
    pub fn tree_index(&self, ordinal: usize) -> Result<usize, MerkleError> {
        self.tree_indices
            .get(&ordinal)
            .copied()
            .ok_or(MerkleError::NoSuchLeaf { ordinal })
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        (self.hashes.len() + 1) / 2
    }

    /// Number of array slots (`2n - 1`).
    pub fn node_count(&self) -> usize {
        self.hashes.len()
    }

    pub fn hashes(&self) -> &[FieldValue] {
        &self.hashes
    }

    pub fn tree_indices(&self) -> &BTreeMap<usize, usize> {
        &self.tree_indices
    }
}
