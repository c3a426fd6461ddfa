// src/workbook/blank.rs

use crate::errors::{AppError, AppResult};
use crate::models::entry::DAY_NAMES;
use crate::workbook::layout::{ANCHOR_MARKER, BLOCK_GAP, BLOCK_ROW_COUNT, HEADER_PLACEHOLDER};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;

/// Sheet name the generated record book uses.
pub const BLANK_SHEET_NAME: &str = "Logs";

/// Anchor row (0-based) of the first generated block.
const FIRST_ANCHOR: u32 = 3;

/// Build a record book with `weeks` empty week blocks.
pub fn blank_template(weeks: u32) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(BLANK_SHEET_NAME).map_err(to_app_error)?;

    let title = Format::new()
        .set_bold()
        .set_font_size(14)
        .set_align(FormatAlign::Center);

    worksheet
        .merge_range(0, 0, 0, 2, "INDUSTRIAL PLACEMENT RECORD BOOK", &title)
        .map_err(to_app_error)?;
    worksheet
        .write_string(1, 0, "DESIGNATION")
        .map_err(to_app_error)?;
    worksheet
        .write_string(1, 1, HEADER_PLACEHOLDER)
        .map_err(to_app_error)?;

    for week in 0..weeks.max(1) {
        let anchor = FIRST_ANCHOR + week * (BLOCK_ROW_COUNT + BLOCK_GAP);
        write_block(worksheet, anchor)?;
    }

    worksheet.set_column_width(0, 22).map_err(to_app_error)?;
    worksheet.set_column_width(1, 60).map_err(to_app_error)?;
    worksheet.set_column_width(2, 40).map_err(to_app_error)?;

    Ok(workbook)
}

pub fn write_blank_template(path: &Path, weeks: u32) -> AppResult<()> {
    let mut workbook = blank_template(weeks)?;
    workbook.save(path).map_err(to_app_error)
}

pub fn blank_template_bytes(weeks: u32) -> AppResult<Vec<u8>> {
    let mut workbook = blank_template(weeks)?;
    workbook.save_to_buffer().map_err(to_app_error)
}

/// One week block, 21 rows starting at `anchor` (0-based):
/// header, column titles, seven day rows, notes titles, merged notes area,
/// signature rows.
fn write_block(ws: &mut Worksheet, anchor: u32) -> AppResult<()> {
    let label = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::VerticalCenter);

    let heading = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    let text = Format::new()
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    let code = Format::new()
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::Top);

    // Header
    ws.write_string_with_format(anchor, 0, ANCHOR_MARKER, &label)
        .map_err(to_app_error)?;
    ws.write_string_with_format(anchor, 1, HEADER_PLACEHOLDER, &text)
        .map_err(to_app_error)?;
    ws.write_blank(anchor, 2, &text).map_err(to_app_error)?;

    // Column titles
    for (col, title) in ["DAY", "DESCRIPTION OF WORK DONE", "ACTIVITY CODE"]
        .iter()
        .enumerate()
    {
        ws.write_string_with_format(anchor + 1, col as u16, *title, &heading)
            .map_err(to_app_error)?;
    }

    // Day rows
    for (i, day) in DAY_NAMES.iter().enumerate() {
        let row = anchor + 2 + i as u32;
        ws.write_string_with_format(row, 0, *day, &label)
            .map_err(to_app_error)?;
        ws.write_blank(row, 1, &text).map_err(to_app_error)?;
        ws.write_blank(row, 2, &code).map_err(to_app_error)?;
        ws.set_row_height(row, 32).map_err(to_app_error)?;
    }

    // Problems / solutions
    let notes = anchor + 10;
    ws.write_blank(anchor + 9, 0, &heading).map_err(to_app_error)?;
    ws.write_string_with_format(anchor + 9, 1, "PROBLEMS ENCOUNTERED", &heading)
        .map_err(to_app_error)?;
    ws.write_string_with_format(anchor + 9, 2, "SOLUTIONS FOUND", &heading)
        .map_err(to_app_error)?;
    ws.merge_range(notes, 0, notes + 5, 0, "NOTES", &label)
        .map_err(to_app_error)?;
    ws.merge_range(notes, 1, notes + 5, 1, "", &text)
        .map_err(to_app_error)?;
    ws.merge_range(notes, 2, notes + 5, 2, "", &text)
        .map_err(to_app_error)?;

    // Signatures
    for (i, caption) in [
        "TRAINEE SIGNATURE",
        "SUPERVISOR SIGNATURE",
        "DATE",
        "REMARKS",
    ]
    .iter()
    .enumerate()
    {
        let row = anchor + 17 + i as u32;
        ws.write_string_with_format(row, 0, *caption, &label)
            .map_err(to_app_error)?;
        ws.merge_range(row, 1, row, 2, "", &text)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}
