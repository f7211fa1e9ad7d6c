//! # Error Types
//!
//! Errors shared by the value types in this crate.

use thiserror::Error;

/// Failure to interpret a numeric literal as an unsigned 256-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Input was empty (or only a sign / base prefix).
    #[error("empty numeric literal")]
    Empty,

    /// Negative values are not representable.
    #[error("negative value not allowed: {literal}")]
    Negative { literal: String },

    /// A character is not a digit of the selected base.
    #[error("invalid digit {digit:?} for base {radix} in {literal}")]
    InvalidDigit {
        literal: String,
        digit: char,
        radix: u32,
    },

    /// Misplaced `_` separator.
    #[error("misplaced digit separator in {literal}")]
    MisplacedSeparator { literal: String },

    /// Value does not fit in 256 bits.
    #[error("value exceeds 256 bits: {literal}")]
    Overflow { literal: String },
}

/// Unknown network name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported network: {0}")]
pub struct UnknownNetwork(pub String);
