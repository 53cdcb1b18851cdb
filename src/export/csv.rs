//! Spreadsheet export: UTF-8 with BOM, every field double-quoted

use super::{CSV_FILE_NAME, Exporter};
use crate::core::views::{EXPORT_COLUMNS, ExportRow};

const BOM: char = '\u{FEFF}';

/// CSV exporter
#[derive(Debug, Clone)]
pub struct CsvExporter {
    file_name: String,
}

impl CsvExporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new(CSV_FILE_NAME)
    }
}

/// Wrap in double quotes, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

impl Exporter for CsvExporter {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn render(&self, rows: &[ExportRow]) -> String {
        let mut out = String::new();
        out.push(BOM);
        out.push_str(&EXPORT_COLUMNS.join(","));
        out.push('\n');

        for row in rows {
            let line = row.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",");
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
