//! # Entry Parsing
//!
//! Entries arrive as `"<address>:<votingPower>"`. The voting power is a
//! numeric literal (decimal, or `0x`/`0o`/`0b` prefixed).

use shared_types::{parse_uint_literal, U256};

use super::errors::PipelineError;

/// One parsed whitelist row, address still in its textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub address: String,
    pub voting_power: U256,
}

impl Entry {
    /// Parse the entry at position `index` of a submission.
    pub fn parse(index: usize, raw: &str) -> Result<Self, PipelineError> {
        let mut parts = raw.split(':');
        let (address, voting_power) = match (parts.next(), parts.next(), parts.next()) {
            (Some(address), Some(voting_power), None) => (address, voting_power),
            _ => {
                return Err(PipelineError::MalformedEntry {
                    index,
                    entry: raw.to_string(),
                })
            }
        };

        let voting_power =
            parse_uint_literal(voting_power).map_err(|e| PipelineError::InvalidVotingPower {
                index,
                value: voting_power.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            address: address.to_string(),
            voting_power,
        })
    }
}

/// Parse every entry, stopping at the first bad one.
pub fn parse_entries<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Entry>, PipelineError> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| Entry::parse(index, entry.as_ref()))
        .collect()
}
