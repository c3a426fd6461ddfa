//! Template scanner: finds the week-block anchors of a record book sheet.

use crate::errors::{AppError, AppResult};
use crate::workbook::cells::{cell_text, clear_cell};
use crate::workbook::layout::{ANCHOR_MARKER, BlockLayout};
use umya_spreadsheet::Worksheet;

/// Default number of rows searched for the canonical anchor.
pub const DEFAULT_SCAN_ROWS: u32 = 100;

/// Default window when filling the template's own blocks.
pub const IN_PLACE_SCAN_ROWS: u32 = 1000;

const DESIGNATION_MARKER: &str = "DESIGNATION";

/// Result of scanning a template sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateScan {
    pub layout: BlockLayout,
    /// Every anchor row found in the window, ascending.
    pub anchors: Vec<u32>,
    /// True when the block height was taken from two native anchors
    /// rather than the record-book constant.
    pub measured_height: bool,
}

/// Rows of column A, within `1..=scan_rows`, whose text contains the anchor marker.
pub fn find_anchors(sheet: &Worksheet, scan_rows: u32) -> Vec<u32> {
    (1..=scan_rows)
        .filter(|&row| {
            cell_text(sheet, 1, row)
                .to_uppercase()
                .contains(ANCHOR_MARKER)
        })
        .collect()
}

/// Locate the canonical block and build its layout.
///
/// With two or more anchors the block height is the distance between the first
/// two minus the gap row, provided that still leaves room for the notes row.
pub fn scan_template(sheet: &Worksheet, scan_rows: u32) -> AppResult<TemplateScan> {
    let anchors = find_anchors(sheet, scan_rows);

    let Some(&first) = anchors.first() else {
        return Err(AppError::TemplateNotRecognized(format!(
            "no '{}' marker in column A of sheet '{}' (rows 1-{})",
            ANCHOR_MARKER,
            sheet.get_name(),
            scan_rows
        )));
    };

    let layout = BlockLayout::with_anchor(first);

    let measured = anchors
        .get(1)
        .map(|second| second - first)
        .filter(|distance| *distance > layout.gap)
        .map(|distance| distance - layout.gap)
        .filter(|height| *height >= layout.min_block_height());

    let (layout, measured_height) = match measured {
        Some(h) => (layout.with_block_height(h), true),
        None => (layout, false),
    };

    Ok(TemplateScan {
        layout,
        anchors,
        measured_height,
    })
}

/// Blank stray "DESIGNATION" labels in columns A and B. Returns the number of
/// cells cleared.
pub fn clear_designation_labels(sheet: &mut Worksheet, scan_rows: u32) -> usize {
    let mut cleared = 0;
    for row in 1..=scan_rows {
        for col in [1, 2] {
            if cell_text(sheet, col, row)
                .to_uppercase()
                .contains(DESIGNATION_MARKER)
            {
                clear_cell(sheet, col, row);
                cleared += 1;
            }
        }
    }
    cleared
}

/// One anchor and the rows right below it, for template diagnostics.
#[derive(Debug, Clone)]
pub struct AnchorPreview {
    pub row: u32,
    pub label: String,
    pub header: String,
    /// `(row, [A, B, C])`
    pub rows: Vec<(u32, [String; 3])>,
}

/// Anchor label, header value and the next `depth` rows of columns A–C for
/// every anchor in the scan.
pub fn preview_anchors(sheet: &Worksheet, scan: &TemplateScan, depth: u32) -> Vec<AnchorPreview> {
    scan.anchors
        .iter()
        .map(|&row| AnchorPreview {
            row,
            label: cell_text(sheet, scan.layout.anchor_col, row),
            header: cell_text(sheet, scan.layout.header_col, row),
            rows: (1..=depth)
                .map(|i| {
                    let r = row + i;
                    (
                        r,
                        [
                            cell_text(sheet, 1, r),
                            cell_text(sheet, 2, r),
                            cell_text(sheet, 3, r),
                        ],
                    )
                })
                .collect(),
        })
        .collect()
}
