//! `RecordStore` over any `KeyValueStore`

use crate::core::error::StorageError;
use crate::core::record::RequestRecord;
use crate::core::store::{KeyValueStore, RecordStore};

/// Key the browser build stored its ledger under
pub const DEFAULT_STORAGE_KEY: &str = "pouRecords";

/// Stores the whole ledger as one JSON array under a fixed key.
///
/// The array uses the browser field names, so a blob copied out of local
/// storage loads as-is.
#[derive(Clone)]
pub struct KvRecordStore<S> {
    kv: S,
    key: String,
}

impl<S: KeyValueStore> KvRecordStore<S> {
    pub fn new(kv: S, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Store under [`DEFAULT_STORAGE_KEY`]
    pub fn with_default_key(kv: S) -> Self {
        Self::new(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &S {
        &self.kv
    }
}

impl<S: KeyValueStore> RecordStore for KvRecordStore<S> {
    fn backend_name(&self) -> &str {
        self.kv.backend_name()
    }

    fn load(&self) -> Result<Vec<RequestRecord>, StorageError> {
        let Some(blob) = self.kv.get(&self.key)? else {
            tracing::debug!(
                key = %self.key,
                backend = self.kv.backend_name(),
                "no stored ledger, starting empty"
            );
            return Ok(Vec::new());
        };

        // The browser build could leave a literal `null` behind
        let records: Option<Vec<RequestRecord>> =
            serde_json::from_str(&blob).map_err(|e| StorageError::Corrupt {
                key: self.key.clone(),
                message: e.to_string(),
            })?;
        let records = records.unwrap_or_default();

        tracing::debug!(
            key = %self.key,
            backend = self.kv.backend_name(),
            count = records.len(),
            "loaded ledger"
        );
        Ok(records)
    }

    fn save(&self, records: &[RequestRecord]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(records).map_err(|e| StorageError::Write {
            backend: self.kv.backend_name().to_string(),
            message: format!("encode: {}", e),
        })?;
        self.kv.set(&self.key, &blob)?;

        tracing::debug!(
            key = %self.key,
            backend = self.kv.backend_name(),
            count = records.len(),
            "saved ledger"
        );
        Ok(())
    }
}
