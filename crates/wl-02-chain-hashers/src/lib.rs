//! # Chain Hashers (wl-02)
//!
//! [`ChainHasher`](wl_01_merkle_engine::ChainHasher) implementations for the
//! supported verifier families.
//!
//! | Hasher | Leaf | Node | Pair order |
//! |--------|------|------|------------|
//! | [`EvmHasher`] | `keccak(keccak(abi.encode(address, uint96)))` | `keccak(min ‖ max)` | ascending |
//! | [`StarknetHasher`] | Pedersen array `[type, address, lo128, hi128]` | `pedersen(max, min)` | descending |
//!
//! The pair orders are opposite on purpose: each must match the on-chain
//! verifier that folds the proofs.

pub mod errors;
pub mod evm;
pub mod starknet;

pub use errors::LeafError;
pub use evm::{keccak256, EvmHasher, EvmLeaf};
pub use starknet::{pedersen_array, AddressType, StarknetHasher, StarknetLeaf};
