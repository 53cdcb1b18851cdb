//! Autocomplete lists for employee names and part numbers

use crate::core::record::RequestRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which list to suggest from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Employee,
    Part,
}

/// Known employees and part numbers
///
/// Starts from a preset list (usually from config) and can absorb the values
/// already used in the ledger. Entries are unique ignoring case, kept in
/// first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub employees: Vec<String>,

    #[serde(default)]
    pub parts: Vec<String>,
}

impl Catalog {
    pub fn new(
        employees: impl IntoIterator<Item = String>,
        parts: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut catalog = Self::default();
        extend_unique(&mut catalog.employees, employees);
        extend_unique(&mut catalog.parts, parts);
        catalog
    }

    /// Add every employee name and part number found in `records`
    pub fn absorb_records(&mut self, records: &[RequestRecord]) {
        extend_unique(
            &mut self.employees,
            records.iter().map(|r| r.employee_name.as_str()),
        );
        extend_unique(
            &mut self.parts,
            records
                .iter()
                .flat_map(|r| &r.parts)
                .map(|p| p.part_number.as_str()),
        );
    }

    pub fn entries(&self, kind: CatalogKind) -> &[String] {
        match kind {
            CatalogKind::Employee => &self.employees,
            CatalogKind::Part => &self.parts,
        }
    }

    /// Entries containing `query` (case-insensitive), prefix matches first.
    ///
    /// An empty query returns the whole list.
    pub fn suggest(&self, kind: CatalogKind, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        let (mut prefixed, mut contained): (Vec<&str>, Vec<&str>) = (Vec::new(), Vec::new());

        for entry in self.entries(kind) {
            let lower = entry.to_lowercase();
            if lower.starts_with(&query) {
                prefixed.push(entry);
            } else if lower.contains(&query) {
                contained.push(entry);
            }
        }
        prefixed.append(&mut contained);
        prefixed
    }
}

/// Append trimmed, non-empty values not already in `list` (ignoring case)
fn extend_unique<V: AsRef<str>>(list: &mut Vec<String>, values: impl IntoIterator<Item = V>) {
    let mut seen: HashSet<String> = list.iter().map(|v| v.to_lowercase()).collect();
    for value in values {
        let value = value.as_ref().trim();
        if !value.is_empty() && seen.insert(value.to_lowercase()) {
            list.push(value.to_string());
        }
    }
}
