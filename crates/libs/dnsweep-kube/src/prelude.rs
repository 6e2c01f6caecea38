//! Common types and utilities.

/// Cluster access error type.
pub use crate::error::Error;

/// Cluster access result type.
pub type Result<T> = core::result::Result<T, Error>;
