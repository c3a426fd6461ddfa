use crate::db::journal::Journal;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::models::activity::normalize_code;
use crate::store::EntryStore;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    pub fn apply<S: EntryStore>(
        store: &mut S,
        journal: Option<&Journal>,
        date: NaiveDate,
        code: &str,
        description: &str,
        problem: Option<&str>,
        solution: Option<&str>,
    ) -> AppResult<LogEntry> {
        // ------------------------------------------------
        // 1️⃣ Validate activity code
        // ------------------------------------------------
        let code = normalize_code(code).ok_or_else(|| {
            AppError::InvalidActivity(format!(
                "'{}'. Run `worklogbook activities` for the list of codes.",
                code
            ))
        })?;

        // ------------------------------------------------
        // 2️⃣ Build and store the entry
        // ------------------------------------------------
        let entry = LogEntry::new(date, code, description, problem, solution);
        store.append(entry.clone())?;

        success(format!(
            "Saved {} ({}), week ending {}.",
            entry.date, entry.day_name, entry.week_ending
        ));

        // ------------------------------------------------
        // 3️⃣ Internal log
        // ------------------------------------------------
        if let Some(j) = journal {
            j.note(
                "add",
                &entry.date.to_string(),
                &format!("[{}] {}", entry.activity_code, entry.description),
            );
        }

        Ok(entry)
    }
}
