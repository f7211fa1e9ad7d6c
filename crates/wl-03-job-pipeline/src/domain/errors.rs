//! # Pipeline Errors
//!
//! Messages for the common cases match what RPC clients already parse
//! (`entries cannot be empty`, `request not found`, ...).

use thiserror::Error;
use wl_01_merkle_engine::MerkleError;

use crate::ports::outbound::StoreError;

/// Coarse error class, used by callers to pick a response code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input, rejected before any write.
    Validation,
    /// Unknown job, root, or leaf.
    NotFound,
    /// Storage failure or unreadable stored data.
    Persistence,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    // ---- Validation ----
    #[error("entries cannot be empty")]
    EmptyEntries,

    #[error("invalid payload format: entry {index} is {entry:?}, expected \"address:votingPower\"")]
    MalformedEntry { index: usize, entry: String },

    #[error("invalid voting power in entry {index} ({value:?}): {reason}")]
    InvalidVotingPower {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("invalid address in entry {index} ({address:?}): {reason}")]
    InvalidAddress {
        index: usize,
        address: String,
        reason: String,
    },

    #[error("unsupported network: {network:?}")]
    UnsupportedNetwork { network: String },

    #[error("{reason}")]
    InvalidRequest { reason: String },

    #[error("invalid root {root:?}: {reason}")]
    InvalidRoot { root: String, reason: String },

    // ---- Not found ----
    #[error("request not found")]
    JobNotFound { id: String },

    #[error("request not found")]
    TreeNotFound { root: String },

    #[error("no leaf at index {index}")]
    NoSuchLeaf { index: i64 },

    // ---- Persistence ----
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("stored tree for root {root} is unreadable: {reason}")]
    CorruptTree { root: String, reason: String },

    #[error("tree construction failed: {0}")]
    Build(#[from] MerkleError),
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::EmptyEntries
            | PipelineError::MalformedEntry { .. }
            | PipelineError::InvalidVotingPower { .. }
            | PipelineError::InvalidAddress { .. }
            | PipelineError::UnsupportedNetwork { .. }
            | PipelineError::InvalidRequest { .. }
            | PipelineError::InvalidRoot { .. } => ErrorKind::Validation,
            PipelineError::JobNotFound { .. }
            | PipelineError::TreeNotFound { .. }
            | PipelineError::NoSuchLeaf { .. } => ErrorKind::NotFound,
            PipelineError::Store(_)
            | PipelineError::CorruptTree { .. }
            | PipelineError::Build(_) => ErrorKind::Persistence,
        }
    }
}
