//! File-backed key-value store
//!
//! The on-disk analogue of browser local storage: a single JSON object that
//! maps keys to string blobs.
//!
//! ```json
//! { "pouRecords": "[{\"employeeName\":\"Alice\", ...}]" }
//! ```
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! original, so a crash mid-write leaves the previous snapshot intact.

use crate::core::error::StorageError;
use crate::core::store::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const BACKEND: &str = "file";

type Entries = BTreeMap<String, String>;

/// Key-value store persisted as one JSON file
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    /// Use `path` as the backing file. Nothing is created until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StorageError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    backend: BACKEND.to_string(),
                    message: format!("{}: {}", self.path.display(), e),
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageError> {
        let write_err = |e: &dyn std::fmt::Display| StorageError::Write {
            backend: BACKEND.to_string(),
            message: format!("{}: {}", self.path.display(), e),
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| write_err(&e))?;
        }

        let json = serde_json::to_string_pretty(entries).map_err(|e| write_err(&e))?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, json).map_err(|e| write_err(&e))?;
        fs::rename(&tmp, &self.path).map_err(|e| write_err(&e))
    }
}

impl KeyValueStore for FileKvStore {
    fn backend_name(&self) -> &'static str {
        BACKEND
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
