//! Block replicator: duplicates a rectangle of cells, styles, merges and row
//! heights at another row of the same sheet.

use crate::workbook::cells::{CellRect, merged_ranges, unmerge_intersecting};
use umya_spreadsheet::{Cell, CellValue, Row, Style, Worksheet};

/// Detached snapshot of one cell: its raw value and, when the source had any
/// explicit formatting, its whole style.
#[derive(Debug, Clone)]
pub struct CellRecord {
    pub value: CellValue,
    pub style: Option<Style>,
}

fn has_formatting(style: &Style) -> bool {
    style.get_font().is_some()
        || style.get_borders().is_some()
        || style.get_fill().is_some()
        || style.get_number_format().is_some()
        || style.get_protection().is_some()
        || style.get_alignment().is_some()
}

pub fn copy_cell(source: &Cell) -> CellRecord {
    let style = source.get_style();
    CellRecord {
        value: source.get_cell_value().clone(),
        style: has_formatting(style).then(|| style.clone()),
    }
}

/// Write `record` into `dest`. The destination style is only replaced when the
/// record carries formatting.
pub fn apply(record: &CellRecord, dest: &mut Cell) {
    *dest.get_cell_value_mut() = record.value.clone();
    if let Some(style) = &record.style {
        dest.set_style(style.clone());
    }
}

/// Carry the visual attributes of `source` onto `dest`. The row number of
/// `dest` is left as is.
fn copy_row_dimension(source: &Row, dest: &mut Row) {
    dest.set_height(*source.get_height());
    dest.set_custom_height(*source.get_custom_height());
    dest.set_descent(*source.get_descent());
    dest.set_thick_bot(*source.get_thick_bot());
    dest.set_hidden(*source.get_hidden());
    dest.set_style(source.get_style().clone());
}

/// Copy `src` so that its first row lands on `dest_row` (columns unchanged).
///
/// Destination merges overlapping the target rectangle are removed before any
/// cell is written. Merges fully inside `src` are recreated at the new rows;
/// merges only partially covered by `src` are not part of the block. Row
/// heights follow the cells.
/// Returns the number of rows copied.
pub fn copy_block(sheet: &mut Worksheet, src: CellRect, dest_row: u32) -> u32 {
    let dest = src.moved_to_row(dest_row);

    // snapshot first: source and destination live in the same sheet
    let mut records: Vec<((u32, u32), Option<CellRecord>)> = Vec::new();
    let mut rows: Vec<(u32, Row)> = Vec::new();
    for row in src.min_row..=src.max_row {
        let target_row = dest.min_row + (row - src.min_row);
        for col in src.min_col..=src.max_col {
            records.push(((col, target_row), sheet.get_cell((col, row)).map(copy_cell)));
        }
        if let Some(dim) = sheet.get_row_dimension(&row) {
            rows.push((target_row, dim.clone()));
        }
    }

    let block_merges: Vec<CellRect> = merged_ranges(sheet)
        .into_iter()
        .filter(|m| src.contains_rect(m))
        .collect();

    unmerge_intersecting(sheet, &dest);

    for ((col, row), record) in records {
        match record {
            Some(rec) => apply(&rec, sheet.get_cell_mut((col, row))),
            None => {
                sheet.remove_cell((col, row));
            }
        }
    }

    for (target_row, dim) in &rows {
        copy_row_dimension(dim, sheet.get_row_dimension_mut(target_row));
    }

    for m in block_merges {
        let moved = m.moved_to_row(dest.min_row + (m.min_row - src.min_row));
        sheet.add_merge_cells(moved.to_a1());
    }

    src.height()
}
