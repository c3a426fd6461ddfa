//! Block filler: writes one week of entries into a week block.

use crate::models::LogEntry;
use crate::workbook::cells::{clear_cell, writable_cell_mut};
use crate::workbook::diagnostics::{SkipReason, SkippedRow};
use crate::workbook::layout::BlockLayout;
use chrono::NaiveDate;
use umya_spreadsheet::{HorizontalAlignmentValues, VerticalAlignmentValues, Worksheet};

/// How a written cell is aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    /// Week-ending date: left.
    Header,
    /// Free text: wrapped, top.
    Text,
    /// Activity code: centered, top.
    Code,
}

/// Blank the header, every day row and the consolidated notes of the block at
/// `start`, leaving formatting untouched.
pub fn clear_block(sheet: &mut Worksheet, layout: &BlockLayout, start: u32) {
    clear_cell(sheet, layout.header_col, start);

    for offset in layout.day_offsets {
        clear_cell(sheet, layout.description_col, start + offset);
        clear_cell(sheet, layout.code_col, start + offset);
    }

    let notes = layout.notes_row(start);
    clear_cell(sheet, layout.problems_col, notes);
    clear_cell(sheet, layout.solutions_col, notes);
}

/// Fill the block at `start` with the entries whose week ends on `week_ending`.
///
/// Entries of other weeks are ignored; entries with an unknown day name are
/// skipped and returned as diagnostics.
pub fn fill_block(
    sheet: &mut Worksheet,
    layout: &BlockLayout,
    start: u32,
    week_ending: NaiveDate,
    entries: &[LogEntry],
) -> Vec<SkippedRow> {
    clear_block(sheet, layout, start);

    write_text(
        sheet,
        layout.header_col,
        start,
        &week_ending.format("%Y-%m-%d").to_string(),
        Placement::Header,
    );

    let mut skipped = Vec::new();
    let mut problems: Vec<&str> = Vec::new();
    let mut solutions: Vec<&str> = Vec::new();

    for entry in entries.iter().filter(|e| e.week_ending == week_ending) {
        let Some(row) = layout.day_row(start, &entry.day_name) else {
            skipped.push(SkippedRow::new(entry, SkipReason::UnknownDay));
            continue;
        };

        write_text(
            sheet,
            layout.description_col,
            row,
            &entry.description,
            Placement::Text,
        );
        write_text(
            sheet,
            layout.code_col,
            row,
            &entry.activity_code,
            Placement::Code,
        );

        if let Some(p) = entry.problem.as_deref().filter(|p| !p.trim().is_empty()) {
            problems.push(p);
        }
        if let Some(s) = entry.solution.as_deref().filter(|s| !s.trim().is_empty()) {
            solutions.push(s);
        }
    }

    let notes = layout.notes_row(start);
    if !problems.is_empty() {
        write_text(
            sheet,
            layout.problems_col,
            notes,
            &problems.join("\n"),
            Placement::Text,
        );
    }
    if !solutions.is_empty() {
        write_text(
            sheet,
            layout.solutions_col,
            notes,
            &solutions.join("\n"),
            Placement::Text,
        );
    }

    skipped
}

fn write_text(sheet: &mut Worksheet, col: u32, row: u32, text: &str, placement: Placement) {
    let cell = writable_cell_mut(sheet, col, row);
    cell.set_value_string(text);

    let alignment = cell.get_style_mut().get_alignment_mut();
    match placement {
        Placement::Header => {
            alignment.set_horizontal(HorizontalAlignmentValues::Left);
        }
        Placement::Text => {
            alignment.set_wrap_text(true);
            alignment.set_vertical(VerticalAlignmentValues::Top);
        }
        Placement::Code => {
            alignment.set_horizontal(HorizontalAlignmentValues::Center);
            alignment.set_vertical(VerticalAlignmentValues::Top);
        }
    }
}
