//! Macro-generated test suite for `RecordStore` contract validation.
//!
//! The `record_store_tests!` macro generates a test module that validates any
//! `RecordStore` implementation: empty loads, lossless round-trips, snapshot
//! replacement, and a full ledger session written through the store.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//!
//! record_store_tests!(KvRecordStore::with_default_key(InMemoryKvStore::new()));
//! ```
//!
//! # Generated Tests
//!
//! - `test_load_empty`: nothing stored loads as an empty ledger
//! - `test_round_trip_is_lossless`: save then load returns identical records
//! - `test_save_replaces_snapshot`: the latest save wins
//! - `test_save_empty_snapshot`: saving an empty ledger clears it
//! - `test_ledger_session_persists`: every ledger mutation reaches the store
//! - `test_reopen_preserves_order_and_ids`: a new ledger sees the same sequence

/// Generate a `RecordStore` conformance test suite.
///
/// `$factory` must evaluate to a fresh `RecordStore`. It is re-evaluated for
/// each test to keep them isolated.
#[macro_export]
macro_rules! record_store_tests {
    ($factory:expr) => {
        mod record_store_contract_tests {
            use super::*;
            use pou::prelude::*;

            #[test]
            fn test_load_empty() {
                let store = $factory;
                let records = store.load().unwrap();
                assert!(records.is_empty(), "fresh store should load no records");
            }

            #[test]
            fn test_round_trip_is_lossless() {
                let store = $factory;
                let records = sample_records();

                store.save(&records).unwrap();
                let loaded = store.load().unwrap();

                assert_eq!(loaded, records);
                store.save(&loaded).unwrap();
                assert_eq!(store.load().unwrap(), records);
            }

            #[test]
            fn test_save_replaces_snapshot() {
                let store = $factory;
                let records = sample_records();

                store.save(&records).unwrap();
                store.save(&records[..1]).unwrap();

                let loaded = store.load().unwrap();
                assert_count(&loaded, 1);
                assert_eq!(loaded[0], records[0]);
            }

            #[test]
            fn test_save_empty_snapshot() {
                let store = $factory;
                store.save(&sample_records()).unwrap();
                store.save(&[]).unwrap();
                assert!(store.load().unwrap().is_empty());
            }

            #[test]
            fn test_ledger_session_persists() {
                let mut ledger = Ledger::open_with_clock($factory, fixed_clock()).unwrap();

                ledger.create(alice_request()).unwrap();
                assert_count(&ledger.store().load().unwrap(), 1);

                ledger
                    .fulfill(0, Fulfillment::new("JS").with_inventory_count("20"))
                    .unwrap();
                let stored = ledger.store().load().unwrap();
                assert_eq!(stored[0].status, RequestStatus::Fulfilled);
                assert_eq!(stored[0].stockroom_initials, "JS");
                assert_eq!(stored.as_slice(), ledger.records());
            }

            #[test]
            fn test_reopen_preserves_order_and_ids() {
                let store = $factory;
                let records = sample_records();
                store.save(&records).unwrap();

                let ledger = Ledger::open_with_clock(store, fixed_clock()).unwrap();
                let ids: Vec<_> = ledger.records().iter().map(|r| r.id).collect();
                let expected: Vec<_> = records.iter().map(|r| r.id).collect();
                assert_eq!(ids, expected);
                assert_eq!(ledger.stats().fulfilled_count, 1);
            }
        }
    };
}
