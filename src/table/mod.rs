//! Table Module
//!
//! The sorted key/data table behind every lookup.
//!
//! ## Responsibilities
//! - Own the ordered entry sequence
//! - Deterministic population from a `Config`
//! - Validate the strict-ascending invariant for caller-supplied entries
//! - O(log n) lookups via the search core
//!
//! ## Data Structure Choice
//! A plain `Vec<Entry>` kept sorted:
//! - Populated once, immutable afterwards, so no balancing is needed
//! - Contiguous storage keeps the bisection cache-friendly
//! - `Send + Sync` for free (no interior mutability)

mod sorted;

pub use sorted::SortedTable;

use serde::{Deserialize, Serialize};

/// A single key/data pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The ordered field used to locate the entry
    pub key: i64,

    /// The value associated with the key
    pub data: i64,
}

impl Entry {
    /// Create an entry
    pub fn new(key: i64, data: i64) -> Self {
        Self { key, data }
    }
}
