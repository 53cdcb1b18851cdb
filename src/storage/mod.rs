//! Storage implementations for different backends

pub mod file;
pub mod in_memory;
pub mod kv;
#[cfg(feature = "lmdb")]
pub mod lmdb;

pub use file::FileKvStore;
pub use in_memory::InMemoryKvStore;
pub use kv::{DEFAULT_STORAGE_KEY, KvRecordStore};
#[cfg(feature = "lmdb")]
pub use lmdb::LmdbKvStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::core::error::Result;
use crate::core::store::RecordStore;

/// Build the record store described by `config`
pub fn open_record_store(config: &StorageConfig) -> Result<Box<dyn RecordStore>> {
    let store: Box<dyn RecordStore> = match config.backend {
        StorageBackend::Memory => {
            Box::new(KvRecordStore::new(InMemoryKvStore::new(), &config.key))
        }
        StorageBackend::File => Box::new(KvRecordStore::new(
            FileKvStore::new(&config.path),
            &config.key,
        )),
        #[cfg(feature = "lmdb")]
        StorageBackend::Lmdb => Box::new(KvRecordStore::new(
            LmdbKvStore::open(&config.path)?,
            &config.key,
        )),
        #[cfg(not(feature = "lmdb"))]
        StorageBackend::Lmdb => {
            return Err(crate::core::error::ConfigError::UnsupportedBackend {
                backend: "lmdb".to_string(),
                reason: "built without the `lmdb` feature",
            }
            .into());
        }
    };

    tracing::debug!(
        backend = store.backend_name(),
        path = %config.path.display(),
        key = %config.key,
        "record store ready"
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_memory_store() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            ..Default::default()
        };
        let store = open_record_store(&config).unwrap();
        assert_eq!(store.backend_name(), "memory");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_open_file_store() {
        let dir = TempDir::new().unwrap();
        let config = StorageConfig {
            backend: StorageBackend::File,
            path: dir.path().join("ledger.json"),
            key: "custom".to_string(),
        };
        let store = open_record_store(&config).unwrap();
        store.save(&[]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("ledger.json")).unwrap();
        assert!(raw.contains("\"custom\""));
    }

    #[cfg(not(feature = "lmdb"))]
    #[test]
    fn test_lmdb_requires_feature() {
        let config = StorageConfig {
            backend: StorageBackend::Lmdb,
            ..Default::default()
        };
        let err = open_record_store(&config).err().unwrap();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }
}
