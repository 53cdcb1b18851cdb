//! Configuration loading and management

use crate::core::catalog::Catalog;
use crate::core::error::{ConfigError, Result};
use crate::export::{CSV_FILE_NAME, CsvExporter, TXT_FILE_NAME, TxtExporter};
use crate::storage::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the ledger snapshot lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Lost when the process exits
    Memory,
    /// JSON file at `path`
    #[default]
    File,
    /// LMDB environment directory at `path` (feature `lmdb`)
    Lmdb,
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// File (or LMDB directory) path; ignored by the memory backend
    pub path: PathBuf,

    /// Key the snapshot is stored under
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: PathBuf::from("pou_data.json"),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exports are written into
    pub directory: PathBuf,
    pub csv_file_name: String,
    pub txt_file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            csv_file_name: CSV_FILE_NAME.to_string(),
            txt_file_name: TXT_FILE_NAME.to_string(),
        }
    }
}

impl ExportConfig {
    pub fn csv_exporter(&self) -> CsvExporter {
        CsvExporter::new(&self.csv_file_name)
    }

    pub fn txt_exporter(&self) -> TxtExporter {
        TxtExporter::new(&self.txt_file_name)
    }
}

/// Complete configuration
///
/// Every section is optional; missing values fall back to the defaults.
///
/// ```yaml
/// storage:
///   backend: file
///   path: /var/lib/pou/pou_data.json
/// export:
///   directory: /srv/exports
/// catalog:
///   employees: [Alice Moreno, Bob Li]
///   parts: [HX-100, BOLT-4]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PouConfig {
    pub storage: StorageConfig,
    pub export: ExportConfig,

    /// Preset autocomplete lists
    pub catalog: Catalog,
}

impl PouConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml).map_err(ConfigError::from)?;
        Ok(config)
    }
}
