//! Cell addressing and merged-range helpers on top of umya worksheets.
//!
//! Coordinates are `(col, row)`, both 1-based, as umya expects them.

use umya_spreadsheet::helper::coordinate::coordinate_from_index;
use umya_spreadsheet::{Cell, CellValue, Range, Worksheet};

/// Closed rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub min_row: u32,
    pub max_row: u32,
    pub min_col: u32,
    pub max_col: u32,
}

impl CellRect {
    pub fn new(min_row: u32, max_row: u32, min_col: u32, max_col: u32) -> Self {
        Self {
            min_row: min_row.min(max_row),
            max_row: min_row.max(max_row),
            min_col: min_col.min(max_col),
            max_col: min_col.max(max_col),
        }
    }

    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }

    pub fn contains(&self, col: u32, row: u32) -> bool {
        (self.min_col..=self.max_col).contains(&col) && (self.min_row..=self.max_row).contains(&row)
    }

    pub fn contains_rect(&self, other: &CellRect) -> bool {
        other.min_row >= self.min_row
            && other.max_row <= self.max_row
            && other.min_col >= self.min_col
            && other.max_col <= self.max_col
    }

    pub fn intersects(&self, other: &CellRect) -> bool {
        !(self.max_col < other.min_col
            || other.max_col < self.min_col
            || self.max_row < other.min_row
            || other.max_row < self.min_row)
    }

    /// Same columns, rows moved so that `min_row` becomes `dest_row`.
    pub fn moved_to_row(&self, dest_row: u32) -> CellRect {
        CellRect {
            min_row: dest_row,
            max_row: dest_row + (self.max_row - self.min_row),
            min_col: self.min_col,
            max_col: self.max_col,
        }
    }

    /// A1 notation, e.g. "B14:C19".
    pub fn to_a1(&self) -> String {
        let start = coordinate_from_index(&self.min_col, &self.min_row);
        if self.min_row == self.max_row && self.min_col == self.max_col {
            start
        } else {
            format!(
                "{start}:{}",
                coordinate_from_index(&self.max_col, &self.max_row)
            )
        }
    }
}

/// Bounds of a umya range; a single-cell range ends where it starts.
pub fn range_rect(range: &Range) -> Option<CellRect> {
    let min_col = *range.get_coordinate_start_col()?.get_num();
    let min_row = *range.get_coordinate_start_row()?.get_num();
    let max_col = range
        .get_coordinate_end_col()
        .map_or(min_col, |c| *c.get_num());
    let max_row = range
        .get_coordinate_end_row()
        .map_or(min_row, |r| *r.get_num());
    Some(CellRect::new(min_row, max_row, min_col, max_col))
}

/// Every merged range of the sheet that parses as a rectangle.
pub fn merged_ranges(sheet: &Worksheet) -> Vec<CellRect> {
    sheet
        .get_merge_cells()
        .iter()
        .filter_map(range_rect)
        .collect()
}

pub fn merged_range_at(sheet: &Worksheet, col: u32, row: u32) -> Option<CellRect> {
    merged_ranges(sheet)
        .into_iter()
        .find(|m| m.contains(col, row))
}

/// Coordinate that actually accepts a write: the top-left cell of the
/// merge containing `(col, row)`, or `(col, row)` itself.
pub fn resolve_writable_cell(sheet: &Worksheet, col: u32, row: u32) -> (u32, u32) {
    merged_range_at(sheet, col, row)
        .map(|m| (m.min_col, m.min_row))
        .unwrap_or((col, row))
}

pub fn writable_cell_mut(sheet: &mut Worksheet, col: u32, row: u32) -> &mut Cell {
    let (c, r) = resolve_writable_cell(sheet, col, row);
    sheet.get_cell_mut((c, r))
}

/// Drop every merge intersecting `rect`. Returns how many were removed;
/// asking to unmerge a range that no longer exists is a no-op.
pub fn unmerge_intersecting(sheet: &mut Worksheet, rect: &CellRect) -> usize {
    let merges = sheet.get_merge_cells_mut();
    let before = merges.len();
    merges.retain(|m| match range_rect(m) {
        Some(bounds) => !bounds.intersects(rect),
        None => true,
    });
    before - merges.len()
}

/// Drop every merge whose first row is below `row`.
pub fn unmerge_below(sheet: &mut Worksheet, row: u32) -> usize {
    let merges = sheet.get_merge_cells_mut();
    let before = merges.len();
    merges.retain(|m| match range_rect(m) {
        Some(bounds) => bounds.min_row <= row,
        None => true,
    });
    before - merges.len()
}

/// Displayed text of a cell, empty when the cell does not exist.
pub fn cell_text(sheet: &Worksheet, col: u32, row: u32) -> String {
    sheet
        .get_cell((col, row))
        .map(|c| c.get_value().to_string())
        .unwrap_or_default()
}

/// Blank the value of the writable cell behind `(col, row)`, keeping its style.
/// Cells that do not exist are left alone.
pub fn clear_cell(sheet: &mut Worksheet, col: u32, row: u32) {
    let (c, r) = resolve_writable_cell(sheet, col, row);
    if sheet.get_cell((c, r)).is_some() {
        *sheet.get_cell_mut((c, r)).get_cell_value_mut() = CellValue::default();
    }
}
