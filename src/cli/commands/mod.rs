pub mod activities;
pub mod add;
pub mod add_week;
pub mod config;
pub mod fill;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod reset;
pub mod scan;
pub mod template;

use crate::config::Config;
use crate::db::journal::Journal;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::store::CsvEntryStore;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use crate::workbook::FillOptions;
use std::path::PathBuf;

/// Open the journal; a journal that cannot be opened never blocks a command.
pub(crate) fn open_journal(cfg: &Config) -> Option<Journal> {
    match Journal::open(&cfg.journal_file_path()) {
        Ok(j) => Some(j),
        Err(e) => {
            warning(format!("Failed to open internal log: {e}"));
            None
        }
    }
}

/// `--template` if given, else the configured template.
pub(crate) fn resolve_template(arg: &Option<String>, cfg: &Config) -> AppResult<PathBuf> {
    arg.as_deref()
        .map(expand_tilde)
        .or_else(|| cfg.template_path())
        .ok_or_else(|| {
            AppError::Config("no template given; pass --template or set `template` in the config".into())
        })
}

pub(crate) fn fill_options(cfg: &Config) -> FillOptions {
    FillOptions {
        template_sheet: cfg.template_sheet.clone(),
        scan_rows: cfg.scan_rows,
        in_place_scan_rows: cfg.in_place_scan_rows,
    }
}

/// Load the configured entries file. Unreadable lines are skipped with a
/// warning unless `quiet`.
pub(crate) fn load_entries(cfg: &Config, quiet: bool) -> AppResult<Vec<LogEntry>> {
    let loaded = CsvEntryStore::new(cfg.entries_file_path()).load_checked()?;
    if !quiet {
        for r in &loaded.rejected {
            warning(format!("Skipping line {} of the entries file: {}", r.line, r.reason));
        }
    }
    Ok(loaded.entries)
}
