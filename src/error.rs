//! Error types for BisectKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using BisectError
pub type Result<T> = std::result::Result<T, BisectError>;

/// Unified error type for BisectKV operations
///
/// Only table construction can fail; a missed lookup is `None`, not an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BisectError {
    // -------------------------------------------------------------------------
    // Table Construction Errors
    // -------------------------------------------------------------------------
    #[error("entries out of order at index {index}: key {prev} precedes key {next}")]
    UnsortedEntries { index: usize, prev: i64, next: i64 },

    #[error("duplicate key {key} at index {index}")]
    DuplicateKey { index: usize, key: i64 },
}
