//! Typed error handling for the request ledger
//!
//! Every fallible operation in the crate returns [`PouError`], so callers
//! (the CLI, or any other presentation layer) can match on the category and
//! prompt the user accordingly instead of inspecting strings.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: a required field is empty, or no parts were staged
//! - [`NotFoundError`]: an index or id does not resolve to a record
//! - [`PouError::AlreadyFulfilled`]: a second fulfillment of the same record
//! - [`StorageError`]: the persistence backend failed to read or write
//! - [`ConfigError`]: configuration could not be loaded or is inconsistent
//! - [`ExportError`]: an export could not be produced or written
//!
//! # Example
//!
//! ```rust,ignore
//! match ledger.fulfill(3, fulfillment) {
//!     Ok(record) => println!("Fulfilled {}", record.job_number),
//!     Err(PouError::AlreadyFulfilled { index, .. }) => {
//!         println!("Request #{} is already closed", index + 1);
//!     }
//!     Err(e) => eprintln!("{}: {}", e.error_code(), e),
//! }
//! ```

use thiserror::Error;
use uuid::Uuid;

/// Crate-wide result alias
pub type Result<T, E = PouError> = std::result::Result<T, E>;

/// The main error type for the ledger
#[derive(Debug, Error)]
pub enum PouError {
    /// Missing or empty input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Index or id does not resolve
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The record was already closed out by the stockroom
    #[error("request #{} ({id}) is already fulfilled", .index + 1)]
    AlreadyFulfilled { index: usize, id: Uuid },

    /// Persistence backend failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration failure
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Export failure
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl PouError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PouError::Validation(e) => e.error_code(),
            PouError::NotFound(e) => e.error_code(),
            PouError::AlreadyFulfilled { .. } => "ALREADY_FULFILLED",
            PouError::Storage(_) => "STORAGE_ERROR",
            PouError::Config(_) => "CONFIG_ERROR",
            PouError::Export(e) => e.error_code(),
        }
    }

    /// Whether the user can fix the problem by correcting input and retrying.
    ///
    /// Storage and config errors are environmental; everything else is a
    /// rejected request that left the ledger untouched.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PouError::Storage(_) | PouError::Config(_))
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised by presence checks on user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty after trimming
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// A request was submitted without any staged parts
    #[error("at least one part with quantity is required")]
    NoParts,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. } => "VALIDATION_ERROR",
            ValidationError::NoParts => "VALIDATION_NO_PARTS",
        }
    }
}

// =============================================================================
// Not Found Errors
// =============================================================================

/// Errors raised when a lookup key does not resolve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    /// Ledger index out of range
    #[error("no request at index {index} (ledger holds {len})")]
    Index { index: usize, len: usize },

    /// No record carries this id
    #[error("no request with id '{id}'")]
    Id { id: Uuid },

    /// Staged part index out of range
    #[error("no pending part at index {index} ({len} staged)")]
    PendingPart { index: usize, len: usize },
}

impl NotFoundError {
    pub fn error_code(&self) -> &'static str {
        match self {
            NotFoundError::Index { .. } | NotFoundError::Id { .. } => "RECORD_NOT_FOUND",
            NotFoundError::PendingPart { .. } => "PENDING_PART_NOT_FOUND",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by persistence backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the stored snapshot failed
    #[error("{backend} read error: {message}")]
    Read { backend: String, message: String },

    /// Writing the snapshot failed (quota, permissions, disk full...)
    #[error("{backend} write error: {message}")]
    Write { backend: String, message: String },

    /// The stored blob could not be decoded
    #[error("stored data under key '{key}' is corrupt: {message}")]
    Corrupt { key: String, message: String },

    /// Backend could not be opened at all
    #[error("storage backend '{backend}' is unavailable: {message}")]
    Unavailable { backend: String, message: String },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read config file '{path}': {message}")]
    Io { path: String, message: String },

    /// YAML could not be parsed
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Backend requested that this build cannot provide
    #[error("storage backend '{backend}' is not available: {reason}")]
    UnsupportedBackend {
        backend: String,
        reason: &'static str,
    },
}

// =============================================================================
// Export Errors
// =============================================================================

/// Errors related to CSV/TXT export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing in the ledger
    #[error("No records to export.")]
    Empty,

    /// Destination could not be written
    #[error("failed to write export to '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ExportError::Empty => "EXPORT_EMPTY",
            ExportError::Io { .. } => "EXPORT_ERROR",
        }
    }
}
