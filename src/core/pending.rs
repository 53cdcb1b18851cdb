//! Staging list of parts while a request is being filled in

use crate::core::error::{NotFoundError, Result, ValidationError};
use crate::core::record::PartLine;

/// Parts accumulated before a request is submitted.
///
/// Lives only in the creation workflow. Committing copies the lines into the
/// new record, so clearing or editing the list afterwards never touches it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingParts {
    lines: Vec<PartLine>,
}

impl PendingParts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a part. Both values are trimmed and must be non-empty.
    pub fn add_part(&mut self, part_number: &str, quantity: &str) -> Result<&PartLine> {
        let part_number = part_number.trim();
        let quantity = quantity.trim();

        if part_number.is_empty() {
            return Err(ValidationError::MissingField {
                field: "part number",
            }
            .into());
        }
        if quantity.is_empty() {
            return Err(ValidationError::MissingField { field: "quantity" }.into());
        }

        self.lines.push(PartLine::new(part_number, quantity));
        Ok(&self.lines[self.lines.len() - 1])
    }

    /// Drop the staged part at `index`
    pub fn remove_part(&mut self, index: usize) -> Result<PartLine> {
        if index >= self.lines.len() {
            return Err(NotFoundError::PendingPart {
                index,
                len: self.lines.len(),
            }
            .into());
        }
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn parts(&self) -> &[PartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// One `partNumber (qty)` line per staged part
    pub fn display_lines(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}
