//! Search Core
//!
//! Binary search over a strictly ascending entry slice.
//!
//! ## Responsibilities
//! - Closed-interval bisection, free of I/O
//! - Report each iteration's bounds to an optional observer callback

use crate::table::Entry;

/// Bounds snapshot for one bisection iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Lower bound of the active range (inclusive)
    pub low: usize,

    /// Midpoint probed this iteration
    pub middle: usize,

    /// Upper bound of the active range (inclusive)
    pub high: usize,
}

/// Find the index of `key` in a strictly ascending entry slice
///
/// Returns `None` when the key is absent. O(log n).
pub fn bisect(entries: &[Entry], key: i64) -> Option<usize> {
    bisect_observed(entries, key, |_| {})
}

/// Binary search with a per-iteration observer
///
/// The observer sees the active `(low, middle, high)` bounds before each
/// comparison. It is invoked zero times on an empty slice and at most
/// `floor(log2(n)) + 1` times otherwise.
pub fn bisect_observed(
    entries: &[Entry],
    key: i64,
    mut observer: impl FnMut(Probe),
) -> Option<usize> {
    // Closed interval [low, high]; signed so the empty and leftmost-miss
    // cases fall out of `high = middle - 1` without underflow.
    let mut low: isize = 0;
    let mut high: isize = entries.len() as isize - 1;

    while low <= high {
        let middle = (low + high) / 2;

        observer(Probe {
            low: low as usize,
            middle: middle as usize,
            high: high as usize,
        });

        let probed = entries[middle as usize].key;
        if key == probed {
            return Some(middle as usize);
        } else if key < probed {
            high = middle - 1;
        } else {
            low = middle + 1;
        }
    }

    None
}
