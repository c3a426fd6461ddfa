//! Geometry of one week block, relative to its "WEEK ENDING" anchor row.

use crate::models::entry::day_index_from_name;

/// Marker text identifying the top row of a week block (column A).
pub const ANCHOR_MARKER: &str = "WEEK ENDING";

/// Rows per block in the record book.
pub const BLOCK_ROW_COUNT: u32 = 21;

/// Blank rows between two consecutive blocks.
pub const BLOCK_GAP: u32 = 1;

/// Placeholder written into unclaimed header cells.
pub const HEADER_PLACEHOLDER: &str = "____";

/// Layout descriptor built once by the scanner and handed to the
/// replicator, the month builder and the filler. Rows are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Row of the canonical block's anchor.
    pub anchor_row: u32,
    pub anchor_col: u32,
    pub header_col: u32,
    /// Monday … Sunday, relative to the anchor.
    pub day_offsets: [u32; 7],
    pub description_col: u32,
    pub code_col: u32,
    /// Consolidated problems/solutions row, relative to the anchor.
    pub notes_offset: u32,
    pub problems_col: u32,
    pub solutions_col: u32,
    pub block_height: u32,
    pub gap: u32,
}

impl BlockLayout {
    /// Record-book defaults for a canonical block anchored at `anchor_row`.
    pub fn with_anchor(anchor_row: u32) -> Self {
        Self {
            anchor_row,
            anchor_col: 1,
            header_col: 2,
            day_offsets: [2, 3, 4, 5, 6, 7, 8],
            description_col: 2,
            code_col: 3,
            notes_offset: 10,
            problems_col: 2,
            solutions_col: 3,
            block_height: BLOCK_ROW_COUNT,
            gap: BLOCK_GAP,
        }
    }

    pub fn with_block_height(mut self, height: u32) -> Self {
        self.block_height = height;
        self
    }

    /// Distance between two consecutive anchors.
    pub fn stride(&self) -> u32 {
        self.block_height + self.gap
    }

    /// Anchor row of the `index`-th block (0 = canonical block).
    pub fn block_row(&self, index: u32) -> u32 {
        self.anchor_row + index * self.stride()
    }

    /// Last row belonging to the block anchored at `start`.
    pub fn block_end(&self, start: u32) -> u32 {
        start + self.block_height - 1
    }

    /// Smallest block height that still holds the notes row.
    pub fn min_block_height(&self) -> u32 {
        self.notes_offset + 1
    }

    /// Row of the given day within the block at `start`, from a stored day name.
    pub fn day_row(&self, start: u32, day_name: &str) -> Option<u32> {
        day_index_from_name(day_name).map(|i| start + self.day_offsets[i])
    }

    pub fn notes_row(&self, start: u32) -> u32 {
        start + self.notes_offset
    }

    /// Right-most column the block writes to.
    pub fn last_col(&self) -> u32 {
        [
            self.anchor_col,
            self.header_col,
            self.description_col,
            self.code_col,
            self.problems_col,
            self.solutions_col,
        ]
        .into_iter()
        .max()
        .unwrap_or(self.solutions_col)
    }
}
