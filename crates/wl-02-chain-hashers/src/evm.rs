//! # EVM Hasher
//!
//! Keccak-256 leaves and nodes matching the Solidity verifier:
//!
//! ```text
//! leaf = keccak256(keccak256(abi.encode(address, uint96 votingPower)))
//! node = keccak256(bytes(min(a, b)) ++ bytes(max(a, b)))
//! ```
//!
//! Node inputs are written as minimal big-endian bytes (no leading zeros),
//! the encoding deployed verifiers were built against.

use sha3::{Digest, Keccak256};
use shared_types::{FieldValue, U256};
use wl_01_merkle_engine::ChainHasher;

use crate::errors::LeafError;

/// EVM address width in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Width of the ABI `uint96` voting power slot.
pub const VOTING_POWER_BITS: usize = 96;

/// Keccak-256 of `data`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// One EVM whitelist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmLeaf {
    pub address: [u8; ADDRESS_LEN],
    pub voting_power: U256,
}

impl EvmLeaf {
    /// Parse a hex address and check the voting power fits `uint96`.
    ///
    /// Addresses follow the usual lenient EVM rules: `0x` is optional, an odd
    /// nibble count gets a leading zero, long inputs keep their trailing 20
    /// bytes and short ones are left-padded.
    pub fn new(address: &str, voting_power: U256) -> Result<Self, LeafError> {
        if voting_power.bits() > VOTING_POWER_BITS {
            return Err(LeafError::InvalidVotingPower {
                voting_power: voting_power.to_string(),
                max_bits: VOTING_POWER_BITS,
            });
        }

        Ok(Self {
            address: parse_address(address)?,
            voting_power,
        })
    }

    /// `abi.encode(address, uint96)`: two left-padded 32-byte words.
    pub fn abi_encode(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[32 - ADDRESS_LEN..32].copy_from_slice(&self.address);
        self.voting_power.to_big_endian(&mut out[32..]);
        out
    }
}

fn parse_address(address: &str) -> Result<[u8; ADDRESS_LEN], LeafError> {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    }
    .map_err(|e| LeafError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })?;

    let mut out = [0u8; ADDRESS_LEN];
    if decoded.len() >= ADDRESS_LEN {
        out.copy_from_slice(&decoded[decoded.len() - ADDRESS_LEN..]);
    } else {
        out[ADDRESS_LEN - decoded.len()..].copy_from_slice(&decoded);
    }
    Ok(out)
}

/// Keccak-256 hasher for EVM verifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmHasher;

impl ChainHasher for EvmHasher {
    type Leaf = EvmLeaf;

    fn leaf_hash(&self, leaf: &EvmLeaf) -> FieldValue {
        let inner = keccak256(&leaf.abi_encode());
        FieldValue::from_be_slice(&keccak256(&inner))
    }

    fn node_hash(&self, a: &FieldValue, b: &FieldValue) -> FieldValue {
        let (left, right) = if a > b { (b, a) } else { (a, b) };

        let mut data = left.to_minimal_be_bytes();
        data.extend_from_slice(&right.to_minimal_be_bytes());
        FieldValue::from_be_slice(&keccak256(&data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ADDRESS: &str = "0x556B14CbdA79A36dC33FcD461a04A5BCb5dC2A70";

    fn fv(hex: &str) -> FieldValue {
        hex.parse().unwrap()
    }

    #[test]
    fn test_leaf_hash_fixture() {
        let leaf = EvmLeaf::new(ADDRESS, U256::from(21)).unwrap();
        assert_eq!(
            EvmHasher.leaf_hash(&leaf),
            fv("0xd8c29f38c935b4a569d48ffec67aa6247c90b6598fea89d7bd9415ac50ed7acc")
        );
    }

    #[test]
    fn test_node_hash_fixture() {
        let a = fv("0x2df2ce6efd5635498c6fbc578f885d6ace29517e6f11e507d1c17dcb86d9ddd4");
        let b = fv("0x042f4dc68248f096de5b373868763012bca8ff8c67af7fdbf501da62f38d02cc");
        let want = fv("0xa3efc99720053662d6a13e9ee82b3bd977d544474ff4988e228b511ed7876791");

        assert_eq!(EvmHasher.node_hash(&a, &b), want);
        assert_eq!(EvmHasher.node_hash(&b, &a), want);
    }

    #[test]
    fn test_node_hash_strips_leading_zeros() {
        let a = FieldValue::from(1u64);
        let b = FieldValue::from(0x0203u64);
        let want = FieldValue::from_be_slice(&keccak256(&[1, 2, 3]));
        assert_eq!(EvmHasher.node_hash(&b, &a), want);
    }

    #[test]
    fn test_address_forms() {
        let full = EvmLeaf::new(ADDRESS, U256::one()).unwrap();
        let bare = EvmLeaf::new(&ADDRESS[2..], U256::one()).unwrap();
        let lower = EvmLeaf::new(&ADDRESS.to_lowercase(), U256::one()).unwrap();
        assert_eq!(full, bare);
        assert_eq!(full, lower);

        let short = EvmLeaf::new("0xabc", U256::one()).unwrap();
        let mut expected = [0u8; ADDRESS_LEN];
        expected[18] = 0x0a;
        expected[19] = 0xbc;
        assert_eq!(short.address, expected);

        let long = EvmLeaf::new(&format!("0xffff{}", &ADDRESS[2..]), U256::one()).unwrap();
        assert_eq!(long.address, full.address);
    }

    #[test]
    fn test_rejects_non_hex_address() {
        let err = EvmLeaf::new("0xnothex", U256::one()).unwrap_err();
        assert!(matches!(err, LeafError::InvalidAddress { .. }));
    }

    #[test]
    fn test_voting_power_must_fit_uint96() {
        let max = (U256::one() << 96) - 1;
        assert!(EvmLeaf::new(ADDRESS, max).is_ok());

        let err = EvmLeaf::new(ADDRESS, U256::one() << 96).unwrap_err();
        assert!(matches!(
            err,
            LeafError::InvalidVotingPower { max_bits: 96, .. }
        ));
    }

    #[test]
    fn test_abi_encoding_layout() {
        let leaf = EvmLeaf::new(ADDRESS, U256::from(21)).unwrap();
        let encoded = leaf.abi_encode();

        assert!(encoded[..12].iter().all(|b| *b == 0));
        assert_eq!(&encoded[12..32], &leaf.address);
        assert_eq!(encoded[63], 21);
        assert!(encoded[32..63].iter().all(|b| *b == 0));
    }

    proptest! {
        #[test]
        fn node_hash_is_commutative(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let a = FieldValue::from_be_slice(&a);
            let b = FieldValue::from_be_slice(&b);
            prop_assert_eq!(EvmHasher.node_hash(&a, &b), EvmHasher.node_hash(&b, &a));
        }
    }
}
