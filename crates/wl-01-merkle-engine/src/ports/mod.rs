//! # Ports Layer
//!
//! - **Driven Port**: [`ChainHasher`], implemented once per chain family.

pub mod hasher;

pub use hasher::ChainHasher;
