//! Month sheet builder: one sheet per calendar month, one block per Sunday.

use crate::errors::{AppError, AppResult};
use crate::utils::date::{month_label, sundays_in_month};
use crate::workbook::cells::{CellRect, unmerge_below};
use crate::workbook::layout::BlockLayout;
use crate::workbook::replicator::copy_block;
use chrono::NaiveDate;
use umya_spreadsheet::{Spreadsheet, Worksheet};

/// A generated month sheet and the week-ending date assigned to each block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthSheet {
    pub name: String,
    pub month: NaiveDate,
    /// `(anchor row, week-ending Sunday)`, ascending.
    pub blocks: Vec<(u32, NaiveDate)>,
}

/// Add a sheet for `month`, cloned from `template_name`, holding one block per
/// Sunday of the month. A sheet with the same title is replaced.
pub fn build_month_sheet(
    book: &mut Spreadsheet,
    template_name: &str,
    layout: &BlockLayout,
    month: NaiveDate,
) -> AppResult<MonthSheet> {
    let name = month_label(month);

    let mut sheet: Worksheet = book
        .get_sheet_by_name(template_name)
        .ok_or_else(|| AppError::Workbook(format!("sheet '{template_name}' not found")))?
        .clone();

    sheet.set_name(name.clone());
    keep_canonical_block(&mut sheet, layout);

    let sundays = sundays_in_month(month);
    let count = replicate_blocks(&mut sheet, layout, sundays.len() as u32);

    if book.get_sheet_by_name(&name).is_some() {
        book.remove_sheet_by_name(&name)
            .map_err(|e| AppError::Workbook(format!("cannot replace sheet '{name}': {e}")))?;
    }
    book.add_sheet(sheet)
        .map_err(|e| AppError::Workbook(format!("cannot add sheet '{name}': {e}")))?;

    let blocks = (0..count)
        .map(|i| layout.block_row(i))
        .zip(sundays)
        .collect();

    Ok(MonthSheet {
        name,
        month,
        blocks,
    })
}

/// Delete every row (and merge) below the canonical block, so a cloned sheet
/// starts with exactly one block.
pub fn keep_canonical_block(sheet: &mut Worksheet, layout: &BlockLayout) {
    let block_end = layout.block_end(layout.anchor_row);

    unmerge_below(sheet, block_end);

    let highest = sheet.get_highest_row();
    if highest > block_end {
        sheet.remove_row(&(block_end + 1), &(highest - block_end));
    }
}

/// Grow the sheet to `count` contiguous blocks by copying the canonical one.
/// Block 0 is the canonical block itself. Returns `count`.
pub fn replicate_blocks(sheet: &mut Worksheet, layout: &BlockLayout, count: u32) -> u32 {
    let last_col = sheet.get_highest_column().max(layout.last_col());
    let canonical = CellRect::new(
        layout.anchor_row,
        layout.block_end(layout.anchor_row),
        1,
        last_col,
    );

    for i in 1..count {
        copy_block(sheet, canonical, layout.block_row(i));
    }

    count
}
