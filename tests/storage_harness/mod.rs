//! Shared test harness for storage backend testing
//!
//! Provides a fixed clock, helpers that build realistic records through a
//! throwaway ledger, and the `record_store_tests!` macro that checks any
//! `RecordStore` against the load/save contract.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
mod record_store_tests;

use pou::prelude::*;
use std::sync::Arc;

/// 2024-03-01 14:05:09 local
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::at(2024, 3, 1, 14, 5, 9).expect("valid instant"))
}

/// A ledger over a private in-memory store, pinned to [`fixed_clock`]
pub fn memory_ledger() -> Ledger<KvRecordStore<InMemoryKvStore>> {
    let store = KvRecordStore::with_default_key(InMemoryKvStore::new());
    Ledger::open_with_clock(store, fixed_clock()).expect("empty store opens")
}

/// The request used throughout the scenarios
pub fn alice_request() -> NewRequest {
    NewRequest::new("Alice", "J100", "2024-03-01").with_part("P1", "5")
}

/// Three records: one open, one fulfilled with counts, one with awkward text.
pub fn sample_records() -> Vec<RequestRecord> {
    let mut ledger = memory_ledger();

    ledger.create(alice_request()).unwrap();
    ledger
        .create(
            NewRequest::new("Bob Li", "J200", "2024-03-02")
                .with_notes("second shift")
                .with_part("BOLT-4", "40")
                .with_part("NUT-4", "40"),
        )
        .unwrap();
    ledger
        .create(
            NewRequest::new("Carol \"CJ\" Jones", "J300, rev B", "2024-03-03")
                .with_notes("line 1\nline 2")
                .with_part("HOSE 3/4\"", "2"),
        )
        .unwrap();
    ledger
        .fulfill(
            1,
            Fulfillment::new("JS")
                .with_inventory_count("120")
                .with_adjust_count("-2"),
        )
        .unwrap();

    ledger.records().to_vec()
}

/// Assert that a list contains exactly `n` items.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}
