//! # Job Records

use serde::{Deserialize, Serialize};
use shared_types::{FieldValue, Network};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque job identifier handed back to the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(Uuid);

impl JobId {
    /// Fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for JobId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for JobId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Persisted state of one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub network: Network,
    pub processed: bool,
    /// Set together with `processed`.
    pub root: Option<FieldValue>,
}

impl JobRecord {
    pub fn pending(id: JobId, network: Network) -> Self {
        Self {
            id,
            network,
            processed: false,
            root: None,
        }
    }

    /// Root if the job has finished, `None` while pending.
    pub fn ready_root(&self) -> Option<FieldValue> {
        if self.processed {
            self.root
        } else {
            None
        }
    }

    /// Apply the one-way `Pending -> Processed` transition.
    ///
    /// Returns `false` (and leaves the record untouched) if it already ran.
    pub fn mark_processed(&mut self, root: FieldValue) -> bool {
        if self.processed {
            return false;
        }
        self.processed = true;
        self.root = Some(root);
        true
    }
}
