use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

/// Upper-cased weekday names, Monday first. The position in this array is the
/// weekday index used for week-ending arithmetic and block row offsets.
pub const DAY_NAMES: [&str; 7] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
    "SUNDAY",
];

/// A single day of logged work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub date: NaiveDate,
    pub day_name: String,
    pub week_ending: NaiveDate,
    pub activity_code: String,
    pub description: String,
    pub problem: Option<String>,
    pub solution: Option<String>,
}

impl LogEntry {
    /// Build an entry, deriving `day_name` and `week_ending` from `date`.
    /// Blank problem/solution strings are stored as `None`.
    pub fn new(
        date: NaiveDate,
        activity_code: &str,
        description: &str,
        problem: Option<&str>,
        solution: Option<&str>,
    ) -> Self {
        Self {
            date,
            day_name: day_name(date).to_string(),
            week_ending: week_ending(date),
            activity_code: activity_code.trim().to_string(),
            description: description.to_string(),
            problem: non_blank(problem),
            solution: non_blank(solution),
        }
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
}

/// Monday = 0 … Sunday = 6.
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Upper-cased English weekday name of `date`.
pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[weekday_index(date) as usize]
}

/// The Sunday closing the Monday-start week that contains `date`.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let days_ahead = 6 - weekday_index(date);
    date.checked_add_days(Days::new(days_ahead as u64))
        .unwrap_or(date)
}

/// The Monday opening the week that contains `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_days(Days::new(weekday_index(date) as u64))
        .unwrap_or(date)
}

/// Parse a stored day name back into its weekday index (case-insensitive).
pub fn day_index_from_name(name: &str) -> Option<usize> {
    let upper = name.trim().to_uppercase();
    DAY_NAMES.iter().position(|d| *d == upper)
}

/// Weekday index of a command-line day key: "mon", "Monday", "SUN", …
pub fn day_index_from_key(key: &str) -> Option<usize> {
    let upper = key.trim().to_uppercase();
    if upper.len() < 3 {
        return None;
    }
    DAY_NAMES.iter().position(|d| d.starts_with(&upper))
}

pub fn is_sunday(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sun
}
