//! SortedTable implementation
//!
//! Vec-backed ordered table, populated once and never mutated.

use tracing::trace;

use crate::config::Config;
use crate::error::{BisectError, Result};
use crate::search;

use super::Entry;

/// An ordered key/data table queried via binary search
///
/// Invariant: entries are strictly ascending by key (keys unique). Both
/// constructors uphold it — [`SortedTable::new`] by construction,
/// [`SortedTable::from_entries`] by validation.
#[derive(Debug, Clone)]
pub struct SortedTable {
    entries: Vec<Entry>,
}

impl SortedTable {
    /// Build a table deterministically from a config
    ///
    /// Entry `i` gets `key = i` and `data = i * multiplier`, so keys are
    /// strictly ascending by construction and this cannot fail.
    pub fn new(config: &Config) -> Self {
        let entries = (0..config.entry_count)
            .map(|i| Entry::new(i as i64, i as i64 * config.data_multiplier))
            .collect();

        Self { entries }
    }

    /// Build a table from caller-supplied entries
    ///
    /// The entries must already be strictly ascending by key; out-of-order
    /// or duplicate keys are rejected.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        for (i, pair) in entries.windows(2).enumerate() {
            let (prev, next) = (pair[0].key, pair[1].key);

            if prev == next {
                return Err(BisectError::DuplicateKey {
                    index: i + 1,
                    key: next,
                });
            }
            if prev > next {
                return Err(BisectError::UnsortedEntries {
                    index: i + 1,
                    prev,
                    next,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Look up the data associated with `key`
    ///
    /// Returns `None` when the key is absent. Each bisection iteration emits
    /// a TRACE event with the active bounds.
    pub fn lookup(&self, key: i64) -> Option<i64> {
        self.lookup_entry(key).map(|entry| entry.data)
    }

    /// Look up the full entry for `key`
    pub fn lookup_entry(&self, key: i64) -> Option<Entry> {
        let index = search::bisect_observed(&self.entries, key, |probe| {
            trace!(
                low = probe.low,
                middle = probe.middle,
                high = probe.high,
                key,
                "probe"
            );
        })?;

        Some(self.entries[index])
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending key order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl Default for SortedTable {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
