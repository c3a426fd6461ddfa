use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add_week::{AddWeekLogic, DayDraft};
use crate::errors::{AppError, AppResult};
use crate::models::entry::day_index_from_key;
use crate::store::CsvEntryStore;
use crate::utils::date::parse_date_arg;

/// "wed=Fixed the build" → (2, "Fixed the build")
fn parse_day_value(arg: &str) -> AppResult<(usize, String)> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| AppError::InvalidDay(format!("expected DAY=VALUE, got '{arg}'")))?;
    let day = day_index_from_key(key)
        .ok_or_else(|| AppError::InvalidDay(format!("'{}'", key.trim())))?;
    Ok((day, value.to_string()))
}

/// Handle the `add-week` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::AddWeek {
        week,
        mon,
        tue,
        wed,
        thu,
        fri,
        sat,
        sun,
        code,
        day_codes,
        problems,
        solutions,
    } = cmd
    {
        let week = parse_date_arg(week)?;
        let default_code = code.as_deref().unwrap_or(&cfg.default_activity);

        // 1️⃣ one draft per weekday
        let mut days: Vec<DayDraft> = [mon, tue, wed, thu, fri, sat, sun]
            .into_iter()
            .map(|d| DayDraft {
                description: d.clone().unwrap_or_default(),
                ..DayDraft::default()
            })
            .collect();

        // 2️⃣ per-day extras
        for arg in day_codes {
            let (day, value) = parse_day_value(arg)?;
            days[day].code = Some(value);
        }
        for arg in problems {
            let (day, value) = parse_day_value(arg)?;
            days[day].problem = Some(value);
        }
        for arg in solutions {
            let (day, value) = parse_day_value(arg)?;
            days[day].solution = Some(value);
        }

        let mut store = CsvEntryStore::new(cfg.entries_file_path());
        let journal = open_journal(cfg);

        AddWeekLogic::apply(&mut store, journal.as_ref(), week, &days, default_code)?;
    }
    Ok(())
}
