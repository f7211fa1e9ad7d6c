//! # Domain Layer

pub mod entries;
pub mod errors;
pub mod job;
pub mod leaves;

pub use entries::Entry;
pub use errors::{ErrorKind, PipelineError};
pub use job::{JobId, JobRecord};
pub use leaves::LeafSet;
