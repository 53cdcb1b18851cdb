//! Plain-text export: one `Label: value` block per record

use super::{Exporter, TXT_FILE_NAME};
use crate::core::views::{EXPORT_COLUMNS, ExportRow};

const SEPARATOR_WIDTH: usize = 40;

/// TXT exporter
#[derive(Debug, Clone)]
pub struct TxtExporter {
    file_name: String,
}

impl TxtExporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for TxtExporter {
    fn default() -> Self {
        Self::new(TXT_FILE_NAME)
    }
}

impl Exporter for TxtExporter {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, rows: &[ExportRow]) -> String {
        let separator = format!("{}\n", "-".repeat(SEPARATOR_WIDTH));
        rows.iter()
            .map(|row| {
                EXPORT_COLUMNS
                    .iter()
                    .zip(row.iter())
                    .map(|(label, value)| format!("{label}: {value}\n"))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}
