use crate::models::LogEntry;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// `day_name` is not one of the seven weekday names.
    UnknownDay,
    /// No block exists (or can be claimed) for the entry's week-ending date.
    NoMatchingBlock,
}

/// An entry left out of the generated workbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub date: NaiveDate,
    pub day_name: String,
    pub week_ending: NaiveDate,
    pub reason: SkipReason,
}

impl SkippedRow {
    pub fn new(entry: &LogEntry, reason: SkipReason) -> Self {
        Self {
            date: entry.date,
            day_name: entry.day_name.clone(),
            week_ending: entry.week_ending,
            reason,
        }
    }
}

impl fmt::Display for SkippedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::UnknownDay => write!(
                f,
                "{}: unknown day name '{}' (week ending {})",
                self.date, self.day_name, self.week_ending
            ),
            SkipReason::NoMatchingBlock => write!(
                f,
                "{}: no week block for week ending {}",
                self.date, self.week_ending
            ),
        }
    }
}
