//! Entry store: the table of log entries the record book is filled from.
//!
//! Every write goes through the table transform `with_entry`. The default
//! methods then rewrite the whole backing medium; the CSV store appends
//! instead, so lines it could not read survive later writes.

mod csv_store;

pub use csv_store::{CsvEntryStore, LoadedEntries, RejectedLine};

use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::utils::date::{first_of_month, next_month};
use chrono::NaiveDate;

pub trait EntryStore {
    /// Every stored entry, in insertion order.
    fn load_all(&self) -> AppResult<Vec<LogEntry>>;

    /// Replace the whole table.
    fn write_all(&mut self, entries: &[LogEntry]) -> AppResult<()>;

    /// Delete every stored entry.
    fn clear(&mut self) -> AppResult<()>;

    fn append(&mut self, entry: LogEntry) -> AppResult<()> {
        let table = with_entry(self.load_all()?, entry)?;
        self.write_all(&table)
    }

    fn append_many(&mut self, entries: Vec<LogEntry>) -> AppResult<usize> {
        let mut table = self.load_all()?;
        let count = entries.len();
        for e in entries {
            table = with_entry(table, e)?;
        }
        self.write_all(&table)?;
        Ok(count)
    }
}

/// New table = `table` + `entry`. Entries without a description are refused.
pub fn with_entry(mut table: Vec<LogEntry>, entry: LogEntry) -> AppResult<Vec<LogEntry>> {
    if !entry.has_description() {
        return Err(AppError::EmptyDescription(entry.date.to_string()));
    }
    table.push(entry);
    Ok(table)
}

/// Entries dated within `[start, end]`, in their stored order.
pub fn filter_range(entries: &[LogEntry], start: NaiveDate, end: NaiveDate) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// First day of the earliest entry's month and last day of the latest
/// entry's month, if there are entries.
pub fn month_span(entries: &[LogEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let min = entries.iter().map(|e| e.date).min()?;
    let max = entries.iter().map(|e| e.date).max()?;
    let end = next_month(max).and_then(|d| d.pred_opt()).unwrap_or(max);
    Some((first_of_month(min), end))
}

/// In-memory store for library callers that keep entries elsewhere.
#[derive(Debug, Default, Clone)]
pub struct MemoryEntryStore {
    entries: Vec<LogEntry>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryEntryStore {
    fn load_all(&self) -> AppResult<Vec<LogEntry>> {
        Ok(self.entries.clone())
    }

    fn write_all(&mut self, entries: &[LogEntry]) -> AppResult<()> {
        self.entries = entries.to_vec();
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }
}
