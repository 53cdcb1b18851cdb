//! Persistence traits for the ledger
//!
//! Two layers, mirroring how the browser build used local storage:
//!
//! - [`KeyValueStore`]: a string-keyed blob store (`get`/`set`/`remove`)
//! - [`RecordStore`]: loads and saves the full record snapshot
//!
//! The ledger only talks to a `RecordStore`. [`KvRecordStore`](crate::storage::KvRecordStore)
//! bridges the two by serializing the snapshot as JSON under a fixed key.

use crate::core::error::StorageError;
use crate::core::record::RequestRecord;

/// Loads and saves whole ledger snapshots.
///
/// The store never owns records: it hands out a fresh `Vec` on `load` and
/// copies the slice it is given on `save`.
pub trait RecordStore {
    /// Short backend name for logs and errors
    fn backend_name(&self) -> &str;

    /// Read the stored snapshot. Nothing stored is an empty ledger, not an error.
    fn load(&self) -> Result<Vec<RequestRecord>, StorageError>;

    /// Replace the stored snapshot
    fn save(&self, records: &[RequestRecord]) -> Result<(), StorageError>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn backend_name(&self) -> &str {
        (**self).backend_name()
    }

    fn load(&self) -> Result<Vec<RequestRecord>, StorageError> {
        (**self).load()
    }

    fn save(&self, records: &[RequestRecord]) -> Result<(), StorageError> {
        (**self).save(records)
    }
}

/// String-keyed blob storage
pub trait KeyValueStore {
    fn backend_name(&self) -> &'static str;

    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
