//! # Domain Layer
//!
//! Pure Merkle tree logic. No I/O; hashing is reached through
//! [`crate::ports::ChainHasher`].

pub mod encoding;
pub mod errors;
pub mod tree;

pub use encoding::EncodedTree;
pub use errors::MerkleError;
pub use tree::{left_child_index, parent_index, right_child_index, sibling_index, MerkleTree};
