use crate::db::journal::Journal;
use crate::errors::{AppError, AppResult};
use crate::models::LogEntry;
use crate::models::activity::normalize_code;
use crate::models::entry::{week_ending, week_start};
use crate::store::EntryStore;
use crate::ui::messages::{success, warning};
use chrono::{Days, NaiveDate};

/// One day of a week form. A blank description means the day is skipped.
#[derive(Debug, Clone, Default)]
pub struct DayDraft {
    pub description: String,
    /// Bare code or "code - label"; the week's default when absent.
    pub code: Option<String>,
    pub problem: Option<String>,
    pub solution: Option<String>,
}

/// Business logic for the `add-week` command.
pub struct AddWeekLogic;

impl AddWeekLogic {
    /// Turn the drafts into entries dated Monday..Sunday of the week holding
    /// `week`. Draft `i` is weekday `i`; drafts past Sunday are ignored.
    pub fn build(
        week: NaiveDate,
        days: &[DayDraft],
        default_code: &str,
    ) -> AppResult<Vec<LogEntry>> {
        let monday = week_start(week);

        let mut entries = Vec::new();
        for (i, day) in days.iter().enumerate().take(7) {
            if day.description.trim().is_empty() {
                continue;
            }

            let raw = day.code.as_deref().unwrap_or(default_code);
            let code = normalize_code(raw).ok_or_else(|| {
                AppError::InvalidActivity(format!(
                    "'{}'. Run `worklogbook activities` for the list of codes.",
                    raw
                ))
            })?;

            let date = monday
                .checked_add_days(Days::new(i as u64))
                .ok_or_else(|| AppError::InvalidDate(format!("{monday} + {i} days")))?;

            entries.push(LogEntry::new(
                date,
                code,
                &day.description,
                day.problem.as_deref(),
                day.solution.as_deref(),
            ));
        }
        Ok(entries)
    }

    pub fn apply<S: EntryStore>(
        store: &mut S,
        journal: Option<&Journal>,
        week: NaiveDate,
        days: &[DayDraft],
        default_code: &str,
    ) -> AppResult<Vec<LogEntry>> {
        // ------------------------------------------------
        // 1️⃣ Build every day before touching the store
        // ------------------------------------------------
        let entries = Self::build(week, days, default_code)?;
        let sunday = week_ending(week);

        if entries.is_empty() {
            warning("No descriptions entered. Nothing saved.");
            return Ok(entries);
        }

        // ------------------------------------------------
        // 2️⃣ Store them in one write
        // ------------------------------------------------
        let count = store.append_many(entries.clone())?;

        success(format!("Saved {count} entries for the week ending {sunday}."));

        // ------------------------------------------------
        // 3️⃣ Internal log
        // ------------------------------------------------
        if let Some(j) = journal {
            let days: Vec<&str> = entries.iter().map(|e| e.day_name.as_str()).collect();
            j.note("add-week", &sunday.to_string(), &days.join(", "));
        }

        Ok(entries)
    }
}
