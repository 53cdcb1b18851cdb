//! The Point-of-Use request record and its input types

use crate::core::error::{Result, ValidationError};
use crate::core::views::format_date_mmddyyyy;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shown in place of empty notes and an empty adjust count
pub const NOT_APPLICABLE: &str = "N/A";

/// Lifecycle state of a request
///
/// A request starts `Open` and moves to `Fulfilled` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RequestStatus {
    #[default]
    Open,
    Fulfilled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Open => "Open",
            RequestStatus::Fulfilled => "Fulfilled",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One requested part and its quantity
///
/// The quantity is kept as entered; the stockroom reads it, nothing computes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartLine {
    pub part_number: String,

    /// Stored under `qty` to stay readable by the browser build
    #[serde(rename = "qty", alias = "quantity")]
    pub quantity: String,
}

impl PartLine {
    pub fn new(part_number: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            quantity: quantity.into(),
        }
    }

    /// `P1 (Qty: 5)`, used by the summary block and the CSV parts column
    pub fn qty_label(&self) -> String {
        format!("{} (Qty: {})", self.part_number, self.quantity)
    }
}

impl fmt::Display for PartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.part_number, self.quantity)
    }
}

/// A Point-of-Use parts request
///
/// Records are owned by the [`Ledger`](crate::core::ledger::Ledger), which only
/// ever hands out shared references, so the public fields cannot be used to
/// bypass the lifecycle rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestRecord {
    /// Immutable synthetic identifier, assigned at creation.
    ///
    /// Records stored without one deserialize as nil and get their id when
    /// the ledger is opened.
    #[serde(default)]
    pub id: Uuid,

    pub employee_name: String,
    pub job_number: String,
    pub parts: Vec<PartLine>,

    #[serde(default)]
    pub notes: String,

    /// Canonical `YYYY-MM-DD`
    pub date_pulled: String,

    #[serde(default)]
    pub time_requested: String,

    #[serde(default)]
    pub inventory_count: String,

    #[serde(default)]
    pub adjust_count: String,

    #[serde(default)]
    pub stockroom_initials: String,

    #[serde(default)]
    pub status: RequestStatus,

    #[serde(default)]
    pub fulfilled_time: String,
}

impl RequestRecord {
    /// Build an open record from validated input
    pub(crate) fn open(input: NewRequest, time_requested: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            employee_name: input.employee_name,
            job_number: input.job_number,
            parts: input.parts,
            notes: input.notes,
            date_pulled: input.date_pulled,
            time_requested,
            inventory_count: String::new(),
            adjust_count: String::new(),
            stockroom_initials: String::new(),
            status: RequestStatus::Open,
            fulfilled_time: String::new(),
        }
    }

    /// Close out the record. Callers must have checked `is_open()`.
    pub(crate) fn apply_fulfillment(&mut self, input: Fulfillment, fulfilled_time: String) {
        debug_assert!(self.is_open());
        self.inventory_count = input.inventory_count;
        self.adjust_count = input.adjust_count;
        self.stockroom_initials = input.stockroom_initials;
        self.status = RequestStatus::Fulfilled;
        self.fulfilled_time = fulfilled_time;
    }

    pub fn is_open(&self) -> bool {
        self.status == RequestStatus::Open
    }

    pub fn is_fulfilled(&self) -> bool {
        self.status == RequestStatus::Fulfilled
    }

    /// Notes for display, `N/A` when empty
    pub fn display_notes(&self) -> &str {
        let notes = self.notes.trim();
        if notes.is_empty() { NOT_APPLICABLE } else { notes }
    }

    /// Adjust count for display: `N/A` once fulfilled without one, blank while open
    pub fn display_adjust_count(&self) -> &str {
        if self.adjust_count.is_empty() && self.is_fulfilled() {
            NOT_APPLICABLE
        } else {
            &self.adjust_count
        }
    }

    /// Date pulled as `MM/DD/YYYY`
    pub fn display_date(&self) -> String {
        format_date_mmddyyyy(&self.date_pulled)
    }

    /// `<MM/DD/YYYY> | <job> | <employee>`
    pub fn label(&self) -> String {
        format!(
            "{} | {} | {}",
            self.display_date(),
            self.job_number,
            self.employee_name
        )
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// Input for creating a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRequest {
    pub employee_name: String,
    pub job_number: String,
    /// `YYYY-MM-DD`
    pub date_pulled: String,
    pub notes: String,
    pub parts: Vec<PartLine>,
}

impl NewRequest {
    pub fn new(
        employee_name: impl Into<String>,
        job_number: impl Into<String>,
        date_pulled: impl Into<String>,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            job_number: job_number.into(),
            date_pulled: date_pulled.into(),
            ..Default::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_part(mut self, part_number: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.parts.push(PartLine::new(part_number, quantity));
        self
    }

    pub fn with_parts(mut self, parts: &[PartLine]) -> Self {
        self.parts.extend_from_slice(parts);
        self
    }

    /// Trim every field and run the presence checks.
    pub fn validate(self) -> Result<Self> {
        let employee_name = required(&self.employee_name, "employee name")?;
        let job_number = required(&self.job_number, "job number")?;
        let date_pulled = required(&self.date_pulled, "date pulled")?;

        if self.parts.is_empty() {
            return Err(ValidationError::NoParts.into());
        }
        let parts = self
            .parts
            .iter()
            .map(|p| {
                Ok(PartLine::new(
                    required(&p.part_number, "part number")?,
                    required(&p.quantity, "quantity")?,
                ))
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            employee_name,
            job_number,
            date_pulled,
            notes: self.notes.trim().to_string(),
            parts,
        })
    }
}

/// Input for the stockroom fulfillment step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fulfillment {
    pub stockroom_initials: String,
    pub inventory_count: String,
    pub adjust_count: String,
}

impl Fulfillment {
    pub fn new(stockroom_initials: impl Into<String>) -> Self {
        Self {
            stockroom_initials: stockroom_initials.into(),
            ..Default::default()
        }
    }

    pub fn with_inventory_count(mut self, count: impl Into<String>) -> Self {
        self.inventory_count = count.into();
        self
    }

    pub fn with_adjust_count(mut self, count: impl Into<String>) -> Self {
        self.adjust_count = count.into();
        self
    }

    /// Require initials; an empty adjust count becomes `N/A`.
    pub fn validate(self) -> Result<Self> {
        let stockroom_initials = required(&self.stockroom_initials, "stockroom initials")?;
        let adjust_count = if self.adjust_count.is_empty() {
            NOT_APPLICABLE.to_string()
        } else {
            self.adjust_count
        };
        Ok(Self {
            stockroom_initials,
            inventory_count: self.inventory_count,
            adjust_count,
        })
    }
}
