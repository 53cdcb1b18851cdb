//! CSV and plain-text exporters
//!
//! Exporters consume [`ExportRow`]s produced by the ledger and only deal with
//! layout and escaping. Writing to disk goes through [`write_export`], which
//! refuses an empty ledger.

pub mod csv;
pub mod txt;

pub use csv::CsvExporter;
pub use txt::TxtExporter;

use crate::core::error::{ExportError, Result};
use crate::core::views::ExportRow;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CSV file name
pub const CSV_FILE_NAME: &str = "pou_logs.csv";

/// Default TXT file name
pub const TXT_FILE_NAME: &str = "pou_logs.txt";

/// Renders export rows into a downloadable document
pub trait Exporter {
    /// File name the document is saved under
    fn file_name(&self) -> &str;

    /// Full document text, including any byte-order mark
    fn render(&self, rows: &[ExportRow]) -> String;
}

/// Render `rows` and write them to `dir/<file_name>`, returning the path.
pub fn write_export(exporter: &dyn Exporter, rows: &[ExportRow], dir: &Path) -> Result<PathBuf> {
    write_export_to(exporter, rows, &dir.join(exporter.file_name()))
}

/// Render `rows` and write them to exactly `path`.
pub fn write_export_to(
    exporter: &dyn Exporter,
    rows: &[ExportRow],
    path: &Path,
) -> Result<PathBuf> {
    if rows.is_empty() {
        return Err(ExportError::Empty.into());
    }

    let io_err = |source| ExportError::Io {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, exporter.render(rows)).map_err(io_err)?;

    tracing::info!(path = %path.display(), rows = rows.len(), "export written");
    Ok(path.to_path_buf())
}
