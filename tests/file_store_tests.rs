//! Integration tests for the JSON file backend using the storage test harness.
//!
//! # Notes
//!
//! Each test gets a fresh temporary directory via `tempfile::TempDir`.

#[macro_use]
mod storage_harness;

use pou::prelude::*;
use std::path::PathBuf;
use storage_harness::*;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Factory helpers (fresh temp dir per test for isolation)
// ---------------------------------------------------------------------------

fn fresh_data_path() -> PathBuf {
    let dir = TempDir::new().expect("Failed to create temp dir");
    // Leak the TempDir so it lives for the duration of the test
    // (otherwise it would be dropped immediately, deleting the files)
    let path = dir.path().join("pou_data.json");
    std::mem::forget(dir);
    path
}

fn fresh_file_store() -> KvRecordStore<FileKvStore> {
    KvRecordStore::with_default_key(FileKvStore::new(fresh_data_path()))
}

record_store_tests!(fresh_file_store());

#[test]
fn test_ledger_survives_restart() {
    let path = fresh_data_path();

    let id = {
        let store = KvRecordStore::with_default_key(FileKvStore::new(&path));
        let mut ledger = Ledger::open_with_clock(store, fixed_clock()).unwrap();
        ledger.create(alice_request()).unwrap();
        ledger.create(alice_request()).unwrap().id
    };

    let store = KvRecordStore::with_default_key(FileKvStore::new(&path));
    let mut ledger = Ledger::open_with_clock(store, fixed_clock()).unwrap();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.index_of(id), Some(1));

    ledger.fulfill_by_id(id, Fulfillment::new("JS")).unwrap();
    assert_eq!(ledger.stats().open_count, 1);
}

#[test]
fn test_opening_through_config() {
    let config = StorageConfig {
        backend: StorageBackend::File,
        path: fresh_data_path(),
        key: DEFAULT_STORAGE_KEY.to_string(),
    };

    {
        let mut ledger = Ledger::open(open_record_store(&config).unwrap()).unwrap();
        ledger.create(alice_request()).unwrap();
    }

    let ledger = Ledger::open(open_record_store(&config).unwrap()).unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.get(0).unwrap().employee_name, "Alice");
}

#[test]
fn test_corrupt_file_fails_to_open() {
    let path = fresh_data_path();
    std::fs::write(&path, "{\"pouRecords\": \"[{broken\"}").unwrap();

    let store = KvRecordStore::with_default_key(FileKvStore::new(&path));
    let err = Ledger::open(store).err().expect("corrupt blob rejected");
    assert!(matches!(err, PouError::Storage(StorageError::Corrupt { .. })));
}
