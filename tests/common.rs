#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use umya_spreadsheet::Spreadsheet;
use worklogbook::models::LogEntry;
use worklogbook::workbook::blank::blank_template_bytes;

pub fn wlb() -> Command {
    cargo_bin_cmd!("worklogbook")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklogbook.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// `--entries` / `--journal` pair for CLI tests.
pub fn setup_store(name: &str) -> (String, String) {
    let entries = temp_path(name, "csv");
    let journal = temp_path(name, "sqlite");
    (
        entries.to_string_lossy().to_string(),
        journal.to_string_lossy().to_string(),
    )
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn entry(d: &str, code: &str, desc: &str) -> LogEntry {
    LogEntry::new(date(d), code, desc, None, None)
}

pub fn entry_with_notes(d: &str, desc: &str, problem: &str, solution: &str) -> LogEntry {
    LogEntry::new(date(d), "4.2", desc, Some(problem), Some(solution))
}

/// Blank record book with `weeks` blocks, anchors at rows 4, 26, 48, …
pub fn template_bytes(weeks: u32) -> Vec<u8> {
    blank_template_bytes(weeks).expect("blank template")
}

pub fn template_book(weeks: u32) -> Spreadsheet {
    read_book(&template_bytes(weeks))
}

pub fn read_book(bytes: &[u8]) -> Spreadsheet {
    umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(bytes.to_vec()), true)
        .expect("readable workbook")
}

/// Write a blank record book to a temp file and return its path.
pub fn template_file(name: &str, weeks: u32) -> PathBuf {
    let path = temp_path(name, "xlsx");
    fs::write(&path, template_bytes(weeks)).expect("write template");
    path
}
