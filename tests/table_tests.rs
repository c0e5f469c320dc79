//! Tests for SortedTable
//!
//! These tests verify:
//! - Deterministic population from config
//! - Strict-ascending invariant validation for caller-supplied entries
//! - Lookup hits and misses
//! - Idempotence and accessors

use bisectkv::{BisectError, Config, Entry, SortedTable};

// =============================================================================
// Helper Functions
// =============================================================================

fn default_table() -> SortedTable {
    SortedTable::new(&Config::default())
}

// =============================================================================
// Population Tests
// =============================================================================

#[test]
fn test_default_population() {
    let table = default_table();

    assert_eq!(table.len(), 100);
    assert_eq!(table.entries()[0], Entry::new(0, 0));
    assert_eq!(table.entries()[99], Entry::new(99, 12177));
}

#[test]
fn test_population_strictly_ascending() {
    for n in [1usize, 2, 3, 17, 100, 1000] {
        let config = Config::builder().entry_count(n).build();
        let table = SortedTable::new(&config);

        assert_eq!(table.len(), n);
        for pair in table.entries().windows(2) {
            assert!(pair[0].key < pair[1].key);
        }
    }
}

#[test]
fn test_custom_multiplier() {
    let config = Config::builder().entry_count(10).data_multiplier(7).build();
    let table = SortedTable::new(&config);

    assert_eq!(table.lookup(3), Some(21));
    assert_eq!(table.lookup(9), Some(63));
}

#[test]
fn test_empty_table() {
    let config = Config::builder().entry_count(0).build();
    let table = SortedTable::new(&config);

    assert!(table.is_empty());
    assert_eq!(table.lookup(0), None);
}

#[test]
fn test_default_impl_matches_default_config() {
    let table = SortedTable::default();

    assert_eq!(table.len(), 100);
    assert_eq!(table.lookup(1), Some(123));
}

// =============================================================================
// from_entries Tests
// =============================================================================

#[test]
fn test_from_entries_sorted() {
    let table = SortedTable::from_entries(vec![
        Entry::new(-10, 1),
        Entry::new(0, 2),
        Entry::new(7, 3),
    ])
    .unwrap();

    assert_eq!(table.lookup(-10), Some(1));
    assert_eq!(table.lookup(7), Some(3));
    assert_eq!(table.lookup(1), None);
}

#[test]
fn test_from_entries_singleton_and_empty() {
    let single = SortedTable::from_entries(vec![Entry::new(5, 50)]).unwrap();
    assert_eq!(single.lookup(5), Some(50));
    assert_eq!(single.lookup(4), None);

    let empty = SortedTable::from_entries(Vec::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.lookup(5), None);
}

#[test]
fn test_from_entries_rejects_unsorted() {
    let err = SortedTable::from_entries(vec![Entry::new(3, 0), Entry::new(1, 0)]).unwrap_err();

    assert_eq!(
        err,
        BisectError::UnsortedEntries {
            index: 1,
            prev: 3,
            next: 1
        }
    );
}

#[test]
fn test_from_entries_rejects_duplicates() {
    let err = SortedTable::from_entries(vec![
        Entry::new(1, 0),
        Entry::new(2, 0),
        Entry::new(2, 9),
    ])
    .unwrap_err();

    assert_eq!(err, BisectError::DuplicateKey { index: 2, key: 2 });
}

// =============================================================================
// Lookup Tests
// =============================================================================

#[test]
fn test_lookup_reference_scenarios() {
    let table = default_table();

    assert_eq!(table.lookup(0), Some(0));
    assert_eq!(table.lookup(50), Some(6150));
    assert_eq!(table.lookup(88), Some(10824));
    assert_eq!(table.lookup(99), Some(12177));
    assert_eq!(table.lookup(100), None);
    assert_eq!(table.lookup(-5), None);
}

#[test]
fn test_lookup_every_key_found() {
    let table = default_table();

    for k in 0..100i64 {
        assert_eq!(table.lookup(k), Some(k * 123));
    }
}

#[test]
fn test_lookup_idempotent() {
    let table = default_table();
    let first = table.lookup(88);

    for _ in 0..10 {
        assert_eq!(table.lookup(88), first);
    }
    assert_eq!(table.len(), 100);
}

#[test]
fn test_lookup_entry() {
    let table = default_table();

    assert_eq!(table.lookup_entry(42), Some(Entry::new(42, 5166)));
    assert_eq!(table.lookup_entry(400), None);
}
