//! # FieldValue
//!
//! The content of every Merkle tree node.
//!
//! Two families of values flow through this type: raw Keccak-256 digests
//! (full 256-bit width) and STARK field elements (reduced modulo the curve
//! prime). The tree engine only relies on total order and equality, so both
//! share one representation.

use primitive_types::U256;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::LiteralError;
use crate::literal::parse_uint_literal;

/// An unsigned 256-bit node value.
///
/// Serializes as `"0x..."` lowercase hex with no leading zeros (zero is
/// `"0x0"`); deserializes from any literal accepted by
/// [`parse_uint_literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FieldValue(U256);

impl FieldValue {
    pub const ZERO: FieldValue = FieldValue(U256::zero());

    #[inline]
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Interpret up to 32 big-endian bytes.
    ///
    /// Callers must not pass more than 32 bytes.
    #[inline]
    pub fn from_be_slice(bytes: &[u8]) -> Self {
        Self(U256::from_big_endian(bytes))
    }

    /// Fixed-width 32-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut buf = [0u8; 32];
        self.0.to_big_endian(&mut buf);
        buf
    }

    /// Big-endian encoding with leading zero bytes stripped.
    ///
    /// Zero encodes as the empty vector.
    pub fn to_minimal_be_bytes(&self) -> Vec<u8> {
        let buf = self.to_be_bytes();
        let skip = buf.iter().take_while(|b| **b == 0).count();
        buf[skip..].to_vec()
    }

    #[inline]
    pub fn as_u256(&self) -> &U256 {
        &self.0
    }

    /// Canonical `0x` hex form, identical to `Display`.
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }
}

impl From<U256> for FieldValue {
    fn from(v: U256) -> Self {
        Self(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        Self(U256::from(v))
    }
}

impl From<FieldValue> for U256 {
    fn from(v: FieldValue) -> Self {
        v.0
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl FromStr for FieldValue {
    type Err = LiteralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_uint_literal(s).map(Self)
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldValueVisitor;

        impl de::Visitor<'_> for FieldValueVisitor {
            type Value = FieldValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a numeric string such as \"0x1f\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<FieldValue, E>
            where
                E: de::Error,
            {
                FieldValue::from_str(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(FieldValueVisitor)
    }
}
