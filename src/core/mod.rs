//! Core module containing the request domain: records, ledger, derived views

pub mod catalog;
pub mod clock;
pub mod error;
pub mod ledger;
pub mod pending;
pub mod record;
pub mod store;
pub mod views;

pub use catalog::{Catalog, CatalogKind};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{
    ConfigError, ExportError, NotFoundError, PouError, Result, StorageError, ValidationError,
};
pub use ledger::Ledger;
pub use pending::PendingParts;
pub use record::{Fulfillment, NOT_APPLICABLE, NewRequest, PartLine, RequestRecord, RequestStatus};
pub use store::{KeyValueStore, RecordStore};
pub use views::{EXPORT_COLUMNS, ExportRow, SelectOption, Stats, TableRow};
