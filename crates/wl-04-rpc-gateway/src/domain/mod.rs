//! Gateway domain: configuration, errors, and wire types.

pub mod config;
pub mod error;
pub mod methods;
