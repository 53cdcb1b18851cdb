//! # pou-ledger
//!
//! Point-of-Use (PoU) parts request tracking: employees request parts for a
//! job, the stockroom fulfills the request, and the whole ledger is kept in a
//! simple key-value store.
//!
//! ## Features
//!
//! - **Append-only ledger**: records are never removed or reordered
//! - **One-way status**: `Open` → `Fulfilled`, enforced, never reversed
//! - **Derived views**: stats, selection list, summary, table and export rows
//!   are recomputed from the ledger on demand
//! - **Pluggable storage**: in-memory, JSON file, or LMDB (`lmdb` feature)
//! - **Exports**: CSV (UTF-8 with BOM) and plain text
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pou::prelude::*;
//!
//! let store = KvRecordStore::with_default_key(InMemoryKvStore::new());
//! let mut ledger = Ledger::open(store)?;
//!
//! let mut pending = PendingParts::new();
//! pending.add_part("P1", "5")?;
//! ledger.submit(NewRequest::new("Alice", "J100", "2024-03-01"), &mut pending)?;
//!
//! ledger.fulfill(0, Fulfillment::new("JS").with_inventory_count("20"))?;
//! assert_eq!(ledger.stats().fulfilled_count, 1);
//!
//! let csv = CsvExporter::default().render(&ledger.export_rows());
//! ```

pub mod config;
pub mod core;
pub mod export;
pub mod storage;

pub use crate::core::error::{PouError, Result};

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Catalog, CatalogKind, Clock, FixedClock, Fulfillment, Ledger, NewRequest, PartLine,
        PendingParts, RequestRecord, RequestStatus, SelectOption, Stats, SystemClock, TableRow,
    };

    // === Errors ===
    pub use crate::core::error::{
        ConfigError, ExportError, NotFoundError, PouError, Result, StorageError, ValidationError,
    };

    // === Storage ===
    pub use crate::core::store::{KeyValueStore, RecordStore};
    pub use crate::storage::{
        DEFAULT_STORAGE_KEY, FileKvStore, InMemoryKvStore, KvRecordStore, open_record_store,
    };
    #[cfg(feature = "lmdb")]
    pub use crate::storage::LmdbKvStore;

    // === Export ===
    pub use crate::export::{CsvExporter, Exporter, TxtExporter, write_export, write_export_to};

    // === Config ===
    pub use crate::config::{ExportConfig, PouConfig, StorageBackend, StorageConfig};
}
