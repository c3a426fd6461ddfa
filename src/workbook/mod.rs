//! Record book templating engine.
//!
//! The scanner finds the canonical week block of a template sheet, the month
//! builder clones that sheet once per calendar month and replicates the block
//! once per Sunday, and the filler writes each week's entries into its block.

pub mod blank;
pub mod cells;
pub mod diagnostics;
pub mod filler;
pub mod in_place;
pub mod layout;
pub mod months;
pub mod replicator;
pub mod scanner;

pub use diagnostics::{SkipReason, SkippedRow};
pub use layout::BlockLayout;
pub use scanner::TemplateScan;

use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::utils::date::months_in_range;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use umya_spreadsheet::Spreadsheet;

/// Message returned when the template carries no week block.
pub const TEMPLATE_NOT_RECOGNIZED: &str =
    "Could not find 'WEEK ENDING' blocks in the Excel file. Is it the correct format?";

/// Preferred name of the template sheet.
pub const DEFAULT_TEMPLATE_SHEET: &str = "Logs";

/// Where the template workbook comes from. It is only ever read.
#[derive(Debug, Clone, Copy)]
pub enum TemplateSource<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// One generated sheet per month touched by `[start, end]`; the template
    /// sheet is removed afterwards.
    Monthly { start: NaiveDate, end: NaiveDate },
    /// Fill the template's own blocks, claiming empty ones as needed.
    InPlace,
}

#[derive(Debug, Clone)]
pub struct FillOptions {
    pub template_sheet: String,
    pub scan_rows: u32,
    pub in_place_scan_rows: u32,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            template_sheet: DEFAULT_TEMPLATE_SHEET.to_string(),
            scan_rows: scanner::DEFAULT_SCAN_ROWS,
            in_place_scan_rows: scanner::IN_PLACE_SCAN_ROWS,
        }
    }
}

/// What `fill_workbook` did to the in-memory workbook.
#[derive(Debug, Clone, Default)]
pub struct FillSummary {
    /// Sheets written, in order.
    pub sheets: Vec<String>,
    /// Week-ending dates that received a block.
    pub weeks: Vec<NaiveDate>,
    pub skipped: Vec<SkippedRow>,
}

/// Result of `fill_excel_sheet`. A missing `document` together with a missing
/// `saved_to` means the template was not recognized; `message` says why.
#[derive(Debug)]
pub struct FillReport {
    pub document: Option<Cursor<Vec<u8>>>,
    pub saved_to: Option<PathBuf>,
    pub message: String,
    pub sheets: Vec<String>,
    pub skipped: Vec<SkippedRow>,
}

impl FillReport {
    pub fn is_success(&self) -> bool {
        self.document.is_some() || self.saved_to.is_some()
    }
}

pub fn open_template(source: TemplateSource<'_>) -> AppResult<Spreadsheet> {
    match source {
        TemplateSource::Path(path) => {
            if !path.exists() {
                return Err(AppError::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("Template not found: {}", path.display()),
                )));
            }
            umya_spreadsheet::reader::xlsx::read(path).map_err(|e| {
                AppError::Workbook(format!("cannot read '{}': {}", path.display(), e))
            })
        }
        TemplateSource::Bytes(bytes) => {
            umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes), true)
                .map_err(|e| AppError::Workbook(format!("cannot read template: {e}")))
        }
    }
}

pub fn save_workbook(book: &Spreadsheet, path: &Path) -> AppResult<()> {
    umya_spreadsheet::writer::xlsx::write(book, path)
        .map_err(|e| AppError::Workbook(format!("cannot write '{}': {}", path.display(), e)))
}

/// Serialize the workbook; the returned cursor is positioned at offset 0.
pub fn workbook_to_buffer(book: &Spreadsheet) -> AppResult<Cursor<Vec<u8>>> {
    let mut buffer = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(book, &mut buffer)
        .map_err(|e| AppError::Workbook(format!("cannot serialize workbook: {e}")))?;
    buffer.set_position(0);
    Ok(buffer)
}

/// Name of the sheet holding the canonical block: `preferred` when the
/// workbook has it, else the active sheet.
pub fn template_sheet_name(book: &Spreadsheet, preferred: &str) -> String {
    if book.get_sheet_by_name(preferred).is_some() {
        preferred.to_string()
    } else {
        book.get_active_sheet().get_name().to_string()
    }
}

/// Scan the template sheet of `book` without touching it.
pub fn scan_workbook(book: &Spreadsheet, options: &FillOptions) -> AppResult<(String, TemplateScan)> {
    let name = template_sheet_name(book, &options.template_sheet);
    let sheet = book
        .get_sheet_by_name(&name)
        .ok_or_else(|| AppError::Workbook(format!("sheet '{name}' not found")))?;
    let scan = scanner::scan_template(sheet, options.scan_rows)?;
    Ok((name, scan))
}

/// Apply `mode` to an in-memory workbook.
pub fn fill_workbook(
    book: &mut Spreadsheet,
    entries: &[LogEntry],
    mode: FillMode,
    options: &FillOptions,
) -> AppResult<FillSummary> {
    match mode {
        FillMode::Monthly { start, end } => fill_months(book, entries, start, end, options),
        FillMode::InPlace => fill_native_blocks(book, entries, options),
    }
}

fn fill_months(
    book: &mut Spreadsheet,
    entries: &[LogEntry],
    start: NaiveDate,
    end: NaiveDate,
    options: &FillOptions,
) -> AppResult<FillSummary> {
    if end < start {
        return Err(AppError::InvalidRange(format!("{start} is after {end}")));
    }

    let (template_name, scan) = scan_workbook(book, options)?;
    let layout = scan.layout;

    let mut summary = FillSummary::default();

    for month in months_in_range(start, end) {
        let built = months::build_month_sheet(book, &template_name, &layout, month)?;

        let sheet = book
            .get_sheet_by_name_mut(&built.name)
            .ok_or_else(|| AppError::Workbook(format!("sheet '{}' vanished", built.name)))?;

        for &(row, sunday) in &built.blocks {
            let skipped = filler::fill_block(sheet, &layout, row, sunday, entries);
            summary.skipped.extend(skipped);
            summary.weeks.push(sunday);
        }

        summary.sheets.push(built.name);
    }

    // entries of the range whose week-ending matches no generated Sunday
    let covered: BTreeSet<NaiveDate> = summary.weeks.iter().copied().collect();
    summary.skipped.extend(
        entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end && !covered.contains(&e.week_ending))
            .map(|e| SkippedRow::new(e, SkipReason::NoMatchingBlock)),
    );

    if !summary.sheets.contains(&template_name) {
        book.remove_sheet_by_name(&template_name).map_err(|e| {
            AppError::Workbook(format!("cannot remove template sheet '{template_name}': {e}"))
        })?;
    }
    book.set_active_sheet(0);

    Ok(summary)
}

fn fill_native_blocks(
    book: &mut Spreadsheet,
    entries: &[LogEntry],
    options: &FillOptions,
) -> AppResult<FillSummary> {
    let scan_options = FillOptions {
        scan_rows: options.in_place_scan_rows,
        ..options.clone()
    };
    let (name, scan) = scan_workbook(book, &scan_options)?;

    let sheet = book
        .get_sheet_by_name_mut(&name)
        .ok_or_else(|| AppError::Workbook(format!("sheet '{name}' not found")))?;

    scanner::clear_designation_labels(sheet, options.in_place_scan_rows);
    let outcome = in_place::fill_in_place(sheet, &scan.layout, &scan.anchors, entries);

    Ok(FillSummary {
        sheets: vec![name],
        weeks: outcome.filled.iter().map(|(_, w)| *w).collect(),
        skipped: outcome.skipped,
    })
}

/// Fill a record book from `template`.
///
/// With `output_path` the workbook is saved there and no document is returned;
/// otherwise the workbook is returned as an in-memory buffer. A template
/// without week blocks is reported through the message, not as an error.
pub fn fill_excel_sheet(
    template: TemplateSource<'_>,
    entries: &[LogEntry],
    mode: FillMode,
    output_path: Option<&Path>,
    options: &FillOptions,
) -> AppResult<FillReport> {
    let mut book = open_template(template)?;

    let summary = match fill_workbook(&mut book, entries, mode, options) {
        Ok(s) => s,
        Err(AppError::TemplateNotRecognized(_)) => {
            return Ok(FillReport {
                document: None,
                saved_to: None,
                message: TEMPLATE_NOT_RECOGNIZED.to_string(),
                sheets: Vec::new(),
                skipped: Vec::new(),
            });
        }
        Err(e) => return Err(e),
    };

    if let Some(path) = output_path {
        save_workbook(&book, path)?;
        return Ok(FillReport {
            document: None,
            saved_to: Some(path.to_path_buf()),
            message: "Saved directly to file.".to_string(),
            sheets: summary.sheets,
            skipped: summary.skipped,
        });
    }

    Ok(FillReport {
        document: Some(workbook_to_buffer(&book)?),
        saved_to: None,
        message: "Success".to_string(),
        sheets: summary.sheets,
        skipped: summary.skipped,
    })
}
