//! LMDB key-value store using heed (memory-mapped B-tree).
//!
//! LMDB is an embedded store, no server required. Each key maps to one
//! string blob in the `pou` named database.
//!
//! # Feature flag
//!
//! Enable with `--features lmdb`. Requires the `heed` crate.

use crate::core::error::StorageError;
use crate::core::store::KeyValueStore;
use heed::types::Str;
use heed::{Database, Env, EnvOpenOptions};
use std::path::Path;
use std::sync::Arc;

const BACKEND: &str = "lmdb";

fn lmdb_err(kind: fn(String, String) -> StorageError, e: heed::Error) -> StorageError {
    kind(BACKEND.to_string(), e.to_string())
}

fn read_err(backend: String, message: String) -> StorageError {
    StorageError::Read { backend, message }
}

fn write_err(backend: String, message: String) -> StorageError {
    StorageError::Write { backend, message }
}

/// LMDB-backed key-value store
///
/// The `Env` is wrapped in an `Arc` so clones share one environment.
#[derive(Clone)]
pub struct LmdbKvStore {
    env: Arc<Env>,
    db: Database<Str, Str>,
}

impl LmdbKvStore {
    /// Open (or create) an LMDB environment at `path`.
    ///
    /// The 64 MB map size is a virtual reservation; LMDB does not allocate it up front.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let unavailable = |message: String| StorageError::Unavailable {
            backend: BACKEND.to_string(),
            message,
        };

        std::fs::create_dir_all(path.as_ref()).map_err(|e| unavailable(e.to_string()))?;

        // SAFETY: the environment is opened once per path by this process and
        // never mapped concurrently with a different map size.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(64 * 1024 * 1024)
                .max_dbs(4)
                .open(path.as_ref())
        }
        .map_err(|e| unavailable(e.to_string()))?;

        let mut wtxn = env.write_txn().map_err(|e| unavailable(e.to_string()))?;
        let db: Database<Str, Str> = env
            .create_database(&mut wtxn, Some("pou"))
            .map_err(|e| unavailable(e.to_string()))?;
        wtxn.commit().map_err(|e| unavailable(e.to_string()))?;

        Ok(Self {
            env: Arc::new(env),
            db,
        })
    }
}

impl KeyValueStore for LmdbKvStore {
    fn backend_name(&self) -> &'static str {
        BACKEND
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let rtxn = self.env.read_txn().map_err(|e| lmdb_err(read_err, e))?;
        let value = self
            .db
            .get(&rtxn, key)
            .map_err(|e| lmdb_err(read_err, e))?;
        Ok(value.map(str::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(|e| lmdb_err(write_err, e))?;
        self.db
            .put(&mut wtxn, key, value)
            .map_err(|e| lmdb_err(write_err, e))?;
        wtxn.commit().map_err(|e| lmdb_err(write_err, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut wtxn = self.env.write_txn().map_err(|e| lmdb_err(write_err, e))?;
        self.db
            .delete(&mut wtxn, key)
            .map_err(|e| lmdb_err(write_err, e))?;
        wtxn.commit().map_err(|e| lmdb_err(write_err, e))
    }
}
