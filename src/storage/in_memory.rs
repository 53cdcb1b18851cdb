//! In-memory key-value store for testing and throwaway sessions

use crate::core::error::StorageError;
use crate::core::store::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

const BACKEND: &str = "memory";

/// In-memory key-value store
///
/// Clones share the same map, so a test can keep a handle and inspect what a
/// ledger wrote through its own copy.
#[derive(Clone, Default)]
pub struct InMemoryKvStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> Result<usize, StorageError> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }
}

fn poisoned(e: impl std::fmt::Display) -> StorageError {
    StorageError::Unavailable {
        backend: BACKEND.to_string(),
        message: format!("lock poisoned: {}", e),
    }
}

impl KeyValueStore for InMemoryKvStore {
    fn backend_name(&self) -> &'static str {
        BACKEND
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get("pouRecords").unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_set_get_remove() {
        let store = InMemoryKvStore::new();
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len().unwrap(), 1);

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = InMemoryKvStore::new();
        let observer = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(observer.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_poisoned_lock_is_unavailable() {
        let store = InMemoryKvStore::new();
        let shared = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = shared.entries.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(matches!(store.len(), Err(StorageError::Unavailable { .. })));
        assert!(store.get("k").is_err());
    }
}
