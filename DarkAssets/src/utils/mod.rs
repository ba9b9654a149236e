//! Utility functions

pub mod hash;
pub mod json;

pub use hash::{HashAlgorithm, identifier};
