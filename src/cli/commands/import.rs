use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::{AppError, AppResult};
use crate::git::{CommitQuery, LocalGitSource};
use crate::models::activity::normalize_code;
use crate::store::CsvEntryStore;
use crate::ui::messages::info;
use crate::utils::date::parse_date_arg;
use crate::utils::path::expand_tilde;

/// Activity code given to imported drafts when none is passed.
const IMPORT_ACTIVITY: &str = "1.1";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        dir,
        author,
        since,
        until,
        code,
        save,
    } = cmd
    {
        let dir = dir
            .clone()
            .or_else(|| cfg.git_scan_dir.clone())
            .map(|d| expand_tilde(&d))
            .ok_or_else(|| AppError::Config("no directory given; pass --dir".into()))?;
        let author = author
            .clone()
            .or_else(|| cfg.git_author.clone())
            .ok_or_else(|| AppError::Config("no author given; pass --author".into()))?;

        let query = CommitQuery {
            author,
            since: parse_date_arg(since)?,
            until: parse_date_arg(until)?,
        };
        if query.until < query.since {
            return Err(AppError::InvalidRange(format!("{since} is after {until}")));
        }

        let code_arg = code.as_deref().unwrap_or(IMPORT_ACTIVITY);
        let code = normalize_code(code_arg)
            .ok_or_else(|| AppError::InvalidActivity(code_arg.to_string()))?;

        let drafts = ImportLogic::draft(&LocalGitSource::new(), &dir, &query)?;

        if drafts.is_empty() {
            return Ok(());
        }

        if *save {
            let mut store = CsvEntryStore::new(cfg.entries_file_path());
            let journal = open_journal(cfg);
            ImportLogic::save(&mut store, journal.as_ref(), drafts, code)?;
        } else {
            info("Preview only; run again with --save to store these entries.");
        }
    }
    Ok(())
}
