//! Derived views over a ledger snapshot
//!
//! Every function here is a pure function of `&[RequestRecord]`. Nothing is
//! cached: after any mutation the caller simply asks again, which keeps the
//! table, the selection list, the summary and the exports in agreement.

use crate::core::record::{RequestRecord, RequestStatus};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Column order shared by the CSV header and [`export_rows`]
pub const EXPORT_COLUMNS: [&str; 12] = [
    "Index",
    "Employee",
    "Job",
    "Parts",
    "Date Pulled",
    "Time Requested",
    "Notes",
    "Inventory Count",
    "Adjust Count",
    "Stockroom Initials",
    "Status",
    "Fulfilled Time",
];

/// One flat export row, fields in [`EXPORT_COLUMNS`] order, unescaped
pub type ExportRow = [String; 12];

/// Render a stored date as `MM/DD/YYYY`.
///
/// Values already in `MM/DD/YYYY` form pass through; anything that is not a
/// three-part `YYYY-MM-DD` is returned unchanged.
pub fn format_date_mmddyyyy(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }
    if date.split('/').count() == 3 {
        return date.to_string();
    }
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [y, m, d] => format!("{m}/{d}/{y}"),
        _ => date.to_string(),
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Ledger counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub open_count: usize,
    pub fulfilled_count: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Records: {} | Open: {} | Fulfilled: {}",
            self.total, self.open_count, self.fulfilled_count
        )
    }
}

pub fn compute_stats(records: &[RequestRecord]) -> Stats {
    let total = records.len();
    let open_count = records
        .iter()
        .filter(|r| r.status == RequestStatus::Open)
        .count();
    Stats {
        total,
        open_count,
        fulfilled_count: total - open_count,
    }
}

// =============================================================================
// Selection list
// =============================================================================

/// An entry of the fulfillment-target dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Position in the ledger, the selection key
    pub index: usize,
    pub id: Uuid,
    pub label: String,
}

pub fn selectable_list(records: &[RequestRecord]) -> Vec<SelectOption> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| SelectOption {
            index,
            id: r.id,
            label: r.label(),
        })
        .collect()
}

// =============================================================================
// Summary
// =============================================================================

/// Detail block for the selected request; `None` when nothing valid is selected.
pub fn summary_text(records: &[RequestRecord], selected: Option<usize>) -> Option<String> {
    let record = records.get(selected?)?;

    let parts_block = if record.parts.is_empty() {
        "None".to_string()
    } else {
        record
            .parts
            .iter()
            .map(|p| format!(" - {}", p.qty_label()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    Some(format!(
        "{}\n\nStatus: {}\nTime Requested: {}\nNotes: {}\n\nParts:\n{}",
        record.label(),
        record.status,
        record.time_requested,
        record.display_notes(),
        parts_block
    ))
}

// =============================================================================
// Records table
// =============================================================================

/// A row of the records table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// 1-based, as shown to users
    pub number: usize,
    pub employee: String,
    pub job: String,
    pub parts: String,
    pub date_pulled: String,
    pub time_requested: String,
    pub notes: String,
    pub inventory_count: String,
    pub adjust_count: String,
    pub stockroom_initials: String,
    pub status: RequestStatus,
    pub fulfilled_time: String,
}

pub fn table_rows(records: &[RequestRecord]) -> Vec<TableRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| TableRow {
            number: index + 1,
            employee: r.employee_name.clone(),
            job: r.job_number.clone(),
            parts: r
                .parts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            date_pulled: r.display_date(),
            time_requested: r.time_requested.clone(),
            notes: r.display_notes().to_string(),
            inventory_count: r.inventory_count.clone(),
            adjust_count: r.display_adjust_count().to_string(),
            stockroom_initials: r.stockroom_initials.clone(),
            status: r.status,
            fulfilled_time: r.fulfilled_time.clone(),
        })
        .collect()
}

// =============================================================================
// Export rows
// =============================================================================

pub fn export_rows(records: &[RequestRecord]) -> Vec<ExportRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| {
            let parts = r
                .parts
                .iter()
                .map(|p| p.qty_label())
                .collect::<Vec<_>>()
                .join("; ");
            [
                (index + 1).to_string(),
                r.employee_name.clone(),
                r.job_number.clone(),
                parts,
                r.display_date(),
                r.time_requested.clone(),
                r.display_notes().to_string(),
                r.inventory_count.clone(),
                r.display_adjust_count().to_string(),
                r.stockroom_initials.clone(),
                r.status.to_string(),
                r.fulfilled_time.clone(),
            ]
        })
        .collect()
}
