//! In-place filling: use the blocks the template already has instead of
//! generating month sheets.

use crate::models::LogEntry;
use crate::workbook::cells::cell_text;
use crate::workbook::diagnostics::{SkipReason, SkippedRow};
use crate::workbook::filler::fill_block;
use crate::workbook::layout::{BlockLayout, HEADER_PLACEHOLDER};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use umya_spreadsheet::Worksheet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InPlaceOutcome {
    /// `(anchor row, week-ending)` of every block written.
    pub filled: Vec<(u32, NaiveDate)>,
    pub skipped: Vec<SkippedRow>,
}

/// Pick the block for `week`: one already labelled with the date, otherwise
/// the first block whose header is empty or still a placeholder.
pub fn find_block_for_week(
    sheet: &Worksheet,
    layout: &BlockLayout,
    anchors: &[u32],
    week: NaiveDate,
) -> Option<u32> {
    let label = week.format("%Y-%m-%d").to_string();

    anchors
        .iter()
        .copied()
        .find(|&row| cell_text(sheet, layout.header_col, row).contains(&label))
        .or_else(|| {
            anchors.iter().copied().find(|&row| {
                let header = cell_text(sheet, layout.header_col, row);
                header.trim().is_empty() || header.contains(HEADER_PLACEHOLDER)
            })
        })
}

/// Write every week present in `entries` (ascending) into the native blocks
/// anchored at `anchors`.
pub fn fill_in_place(
    sheet: &mut Worksheet,
    layout: &BlockLayout,
    anchors: &[u32],
    entries: &[LogEntry],
) -> InPlaceOutcome {
    let mut weeks: BTreeMap<NaiveDate, Vec<&LogEntry>> = BTreeMap::new();
    for e in entries {
        weeks.entry(e.week_ending).or_default().push(e);
    }

    let mut outcome = InPlaceOutcome::default();

    for (week, group) in weeks {
        match find_block_for_week(sheet, layout, anchors, week) {
            Some(row) => {
                let skipped = fill_block(sheet, layout, row, week, entries);
                outcome.skipped.extend(skipped);
                outcome.filled.push((row, week));
            }
            None => outcome.skipped.extend(
                group
                    .into_iter()
                    .map(|e| SkippedRow::new(e, SkipReason::NoMatchingBlock)),
            ),
        }
    }

    outcome
}
