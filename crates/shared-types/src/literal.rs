//! # Numeric Literals
//!
//! Parses unsigned integer literals with base auto-detection:
//!
//! | Prefix | Base |
//! |--------|------|
//! | `0x` / `0X` | 16 |
//! | `0o` / `0O` | 8 |
//! | `0b` / `0B` | 2 |
//! | `0` followed by a digit | 8 |
//! | none | 10 |
//!
//! `_` separators may appear between digits, or between a base prefix and the
//! first digit. A leading `+` is accepted; a leading `-` is rejected.

use primitive_types::U256;

use crate::errors::LiteralError;

/// Parse a numeric literal into a `U256`.
pub fn parse_uint_literal(literal: &str) -> Result<U256, LiteralError> {
    if literal.starts_with('-') {
        return Err(LiteralError::Negative {
            literal: literal.to_string(),
        });
    }
    let unsigned = literal.strip_prefix('+').unwrap_or(literal);
    let (radix, digits, prefixed) = split_radix(unsigned);

    let radix_value = U256::from(radix);
    let mut value = U256::zero();
    let mut seen_digit = false;
    let mut last_was_separator = false;

    for ch in digits.chars() {
        if ch == '_' {
            if last_was_separator || !(seen_digit || prefixed) {
                return Err(LiteralError::MisplacedSeparator {
                    literal: literal.to_string(),
                });
            }
            last_was_separator = true;
            continue;
        }

        let digit = ch.to_digit(radix).ok_or_else(|| LiteralError::InvalidDigit {
            literal: literal.to_string(),
            digit: ch,
            radix,
        })?;

        value = value
            .checked_mul(radix_value)
            .and_then(|v| v.checked_add(U256::from(digit)))
            .ok_or_else(|| LiteralError::Overflow {
                literal: literal.to_string(),
            })?;
        seen_digit = true;
        last_was_separator = false;
    }

    if !seen_digit {
        return Err(LiteralError::Empty);
    }
    if last_was_separator {
        return Err(LiteralError::MisplacedSeparator {
            literal: literal.to_string(),
        });
    }

    Ok(value)
}

/// Split off the base prefix. Returns `(radix, digits, had_prefix)`.
fn split_radix(s: &str) -> (u32, &str, bool) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => return (16, &s[2..], true),
            b'o' | b'O' => return (8, &s[2..], true),
            b'b' | b'B' => return (2, &s[2..], true),
            b'0'..=b'9' | b'_' => return (8, &s[1..], true),
            _ => {}
        }
    }
    (10, s, false)
}
