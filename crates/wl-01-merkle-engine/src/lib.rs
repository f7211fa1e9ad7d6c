//! # Merkle Tree Engine (wl-01)
//!
//! Builds immutable Merkle trees over whitelist leaves and derives inclusion
//! proofs for them. Hashing is injected through the [`ChainHasher`] port, so
//! supporting a new chain family means adding a hasher, never touching the
//! engine.
//!
//! ## Array Layout
//!
//! A tree over `n` leaves is a flat array of `2n - 1` values:
//!
//! ```text
//! index:   0      1      2      3      4
//!        [root, node, leaf2, leaf1, leaf0]     (n = 3)
//!
//! children(i) = (2i + 1, 2i + 2)
//! parent(i)   = (i - 1) / 2          (i > 0)
//! sibling(i)  = i + 1 if i odd, else i - 1   (i > 0)
//! ```
//!
//! Leaves occupy the tail of the array in reverse order, so any `n >= 1` forms
//! a valid (possibly unbalanced) tree with no padding leaves.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement | Location |
//! |----|-----------|-------------|----------|
//! | INVARIANT-1 | Exact Size | `hashes.len() == 2n - 1` | tree.rs `from_leaf_hashes` |
//! | INVARIANT-2 | Leaf Region | every ordinal maps into `[len - n, len)` | tree.rs, encoding.rs |
//! | INVARIANT-3 | Node Rule | `hashes[i] = node_hash(hashes[2i+1], hashes[2i+2])` | tree.rs |
//! | INVARIANT-4 | Immutability | no mutating API after construction | tree.rs |
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): tree construction, proofs, wire format
//! - **Ports Layer** (`ports/`): the `ChainHasher` capability

pub mod domain;
pub mod ports;

pub use domain::{
    left_child_index, parent_index, right_child_index, sibling_index, EncodedTree, MerkleError,
    MerkleTree,
};
pub use ports::ChainHasher;
