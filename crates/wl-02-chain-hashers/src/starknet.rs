//! # Starknet Hasher
//!
//! Pedersen hashing over the STARK field, matching the Cairo verifier:
//!
//! ```text
//! leaf = pedersen_array([address_type, address, vp & (2^128 - 1), vp >> 128])
//! node = pedersen(max(a, b), min(a, b))
//! ```
//!
//! Voting power is split into two 128-bit limbs because the field modulus is
//! below 2^252. Every input is reduced modulo the STARK prime.

use shared_types::{parse_uint_literal, FieldValue, U256};
use starknet_crypto::pedersen_hash;
use starknet_types_core::felt::Felt;
use wl_01_merkle_engine::ChainHasher;

use crate::errors::LeafError;

/// Length of a `0x`-prefixed 20-byte Ethereum address.
const ETHEREUM_ADDRESS_CHARS: usize = 42;

/// STARK field modulus, `2^251 + 17 * 2^192 + 1`, as big-endian bytes.
const STARK_PRIME_BE: [u8; 32] = [
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

/// Address family discriminant hashed into every Starknet leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AddressType {
    Starknet = 0,
    Ethereum = 1,
    Custom = 2,
}

impl AddressType {
    /// Ethereum-style when the string is exactly `0x` + 40 hex chars long.
    pub fn infer(address: &str) -> Self {
        if address.len() == ETHEREUM_ADDRESS_CHARS {
            AddressType::Ethereum
        } else {
            AddressType::Starknet
        }
    }
}

/// One Starknet whitelist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarknetLeaf {
    pub address_type: AddressType,
    pub address: FieldValue,
    pub voting_power: U256,
}

impl StarknetLeaf {
    /// Parse `address`, inferring its [`AddressType`] from its length.
    pub fn new(address: &str, voting_power: U256) -> Result<Self, LeafError> {
        Self::with_type(AddressType::infer(address), address, voting_power)
    }

    pub fn with_type(
        address_type: AddressType,
        address: &str,
        voting_power: U256,
    ) -> Result<Self, LeafError> {
        let parsed = parse_uint_literal(address).map_err(|e| LeafError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            address_type,
            address: FieldValue::new(parsed),
            voting_power,
        })
    }

    fn elements(&self) -> [Felt; 4] {
        let low_mask = U256::MAX >> 128;
        [
            Felt::from(self.address_type as u64),
            to_felt(&self.address),
            to_felt(&FieldValue::new(self.voting_power & low_mask)),
            to_felt(&FieldValue::new(self.voting_power >> 128)),
        ]
    }
}

/// Starknet `compute_hash_on_elements`: fold Pedersen from zero, then hash in
/// the element count.
pub fn pedersen_array(elements: &[Felt]) -> Felt {
    let digest = elements
        .iter()
        .fold(Felt::ZERO, |acc, element| pedersen_hash(&acc, element));
    pedersen_hash(&digest, &Felt::from(elements.len() as u64))
}

fn to_felt(value: &FieldValue) -> Felt {
    let reduced = FieldValue::new(*value.as_u256() % U256::from_big_endian(&STARK_PRIME_BE));
    Felt::from_bytes_be(&reduced.to_be_bytes())
}

fn from_felt(felt: &Felt) -> FieldValue {
    FieldValue::from_be_slice(&felt.to_bytes_be())
}

/// Pedersen hasher for Starknet verifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StarknetHasher;

impl ChainHasher for StarknetHasher {
    type Leaf = StarknetLeaf;

    fn leaf_hash(&self, leaf: &StarknetLeaf) -> FieldValue {
        from_felt(&pedersen_array(&leaf.elements()))
    }

    fn node_hash(&self, a: &FieldValue, b: &FieldValue) -> FieldValue {
        let (left, right) = if a > b { (a, b) } else { (b, a) };
        from_felt(&pedersen_hash(&to_felt(left), &to_felt(right)))
    }
}
