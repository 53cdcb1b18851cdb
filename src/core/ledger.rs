//! The request ledger: append-only record list with an injected store
//!
//! # Lifecycle
//!
//! ```text
//! create ──▶ Open ──fulfill──▶ Fulfilled
//! ```
//!
//! Records are appended at the end and never removed or reordered, so a
//! record's index stays valid for the life of the ledger. Every mutation
//! writes the full snapshot through the [`RecordStore`].
//!
//! # Persistence failures
//!
//! If the write fails after a mutation was applied, the mutation is kept in
//! memory and the `StorageError` is returned. [`Ledger::flush`] retries the
//! write. Validation and lookup failures never touch the ledger.
//!
//! # Usage
//!
//! ```rust,ignore
//! let store = KvRecordStore::with_default_key(FileKvStore::new("pou_data.json"));
//! let mut ledger = Ledger::open(store)?;
//!
//! let mut pending = PendingParts::new();
//! pending.add_part("P1", "5")?;
//! ledger.submit(NewRequest::new("Alice", "J100", "2024-03-01"), &mut pending)?;
//!
//! ledger.fulfill(0, Fulfillment::new("JS").with_inventory_count("20"))?;
//! println!("{}", ledger.stats());
//! ```

use crate::core::clock::{Clock, FULFILLED_TIME_FORMAT, SystemClock, TIME_REQUESTED_FORMAT};
use crate::core::error::{NotFoundError, PouError, Result};
use crate::core::pending::PendingParts;
use crate::core::record::{Fulfillment, NewRequest, RequestRecord};
use crate::core::store::RecordStore;
use crate::core::views::{self, ExportRow, SelectOption, Stats, TableRow};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory source of truth for a session
pub struct Ledger<S> {
    records: Vec<RequestRecord>,
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: RecordStore> Ledger<S> {
    /// Load the stored snapshot using the system clock
    pub fn open(store: S) -> Result<Self> {
        Self::open_with_clock(store, Arc::new(SystemClock))
    }

    /// Load the stored snapshot.
    ///
    /// Records stored without an id get one here, and the snapshot is saved
    /// back so the ids stay the same in later sessions. A failed save is only
    /// logged; the next mutation or [`flush`](Self::flush) writes them.
    pub fn open_with_clock(store: S, clock: Arc<dyn Clock>) -> Result<Self> {
        let mut records = store.load()?;
        tracing::debug!(
            backend = store.backend_name(),
            count = records.len(),
            "ledger opened"
        );

        let mut assigned = 0;
        for record in records.iter_mut().filter(|r| r.id.is_nil()) {
            record.id = Uuid::new_v4();
            assigned += 1;
        }

        let ledger = Self {
            records,
            store,
            clock,
        };
        if assigned > 0 {
            tracing::info!(count = assigned, "assigned ids to stored records");
            if let Err(e) = ledger.persist() {
                tracing::warn!(error = %e, "assigned ids not saved yet");
            }
        }
        Ok(ledger)
    }

    // === Mutations ===

    /// Validate `input` and append a new open request.
    pub fn create(&mut self, input: NewRequest) -> Result<&RequestRecord> {
        let input = input.validate()?;
        let time_requested = self.clock.now().format(TIME_REQUESTED_FORMAT).to_string();
        let record = RequestRecord::open(input, time_requested);

        tracing::info!(
            index = self.records.len(),
            id = %record.id,
            job = %record.job_number,
            parts = record.parts.len(),
            "request created"
        );

        self.records.push(record);
        let index = self.records.len() - 1;
        self.persist()?;
        Ok(&self.records[index])
    }

    /// Create a request from the staged parts, then clear the staging list.
    ///
    /// The staging list is left alone when the request is rejected, so the
    /// user can fix the form and resubmit. It is cleared when the record was
    /// appended, even if the write afterwards failed.
    pub fn submit(
        &mut self,
        input: NewRequest,
        pending: &mut PendingParts,
    ) -> Result<&RequestRecord> {
        let result = self.create(input.with_parts(pending.parts()));
        if matches!(result, Ok(_) | Err(PouError::Storage(_))) {
            pending.clear();
        }
        result
    }

    /// Close out the request at `index`.
    ///
    /// A request is fulfilled at most once; a second attempt fails with
    /// [`PouError::AlreadyFulfilled`] and leaves the first fulfillment intact.
    pub fn fulfill(&mut self, index: usize, input: Fulfillment) -> Result<&RequestRecord> {
        let record = self.records.get(index).ok_or(NotFoundError::Index {
            index,
            len: self.records.len(),
        })?;
        if record.is_fulfilled() {
            return Err(PouError::AlreadyFulfilled {
                index,
                id: record.id,
            });
        }

        let input = input.validate()?;
        let fulfilled_time = self.clock.now().format(FULFILLED_TIME_FORMAT).to_string();

        let record = &mut self.records[index];
        record.apply_fulfillment(input, fulfilled_time);
        tracing::info!(
            index,
            id = %record.id,
            job = %record.job_number,
            initials = %record.stockroom_initials,
            "request fulfilled"
        );

        self.persist()?;
        Ok(&self.records[index])
    }

    /// [`fulfill`](Self::fulfill) addressed by synthetic id
    pub fn fulfill_by_id(&mut self, id: Uuid, input: Fulfillment) -> Result<&RequestRecord> {
        let index = self.index_of(id).ok_or(NotFoundError::Id { id })?;
        self.fulfill(index, input)
    }

    /// Write the current snapshot again, e.g. after a failed save.
    pub fn flush(&self) -> Result<()> {
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.records).map_err(|e| {
            tracing::warn!(
                backend = self.store.backend_name(),
                error = %e,
                "failed to persist ledger, keeping in-memory state"
            );
            PouError::from(e)
        })
    }

    // === Lookups ===

    pub fn records(&self) -> &[RequestRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&RequestRecord> {
        self.records.get(index)
    }

    pub fn find(&self, id: Uuid) -> Option<&RequestRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Today's date in storage form, for prefilling `datePulled`
    pub fn today(&self) -> String {
        self.clock.today()
    }

    // === Derived views ===

    pub fn stats(&self) -> Stats {
        views::compute_stats(&self.records)
    }

    pub fn selectable_list(&self) -> Vec<SelectOption> {
        views::selectable_list(&self.records)
    }

    pub fn summary_text(&self, selected: Option<usize>) -> Option<String> {
        views::summary_text(&self.records, selected)
    }

    pub fn table_rows(&self) -> Vec<TableRow> {
        views::table_rows(&self.records)
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        views::export_rows(&self.records)
    }
}
