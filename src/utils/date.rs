use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

use crate::errors::{AppError, AppResult};

/// Parse `YYYY-MM-DD`, also accepting a trailing time (`YYYY-MM-DD HH:MM:SS`)
/// as written by spreadsheet tools that store dates as datetimes.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    None
}

pub fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month following `date`'s month.
pub fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
}

/// First day of every month touched by `[start, end]`, ascending.
pub fn months_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let last = first_of_month(end);
    let mut m = first_of_month(start);

    while m <= last {
        out.push(m);
        match next_month(m) {
            Some(n) => m = n,
            None => break,
        }
    }

    out
}

/// Every Sunday that falls within the month of `month`.
pub fn sundays_in_month(month: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(month);
    let offset = (7 - first.weekday().num_days_from_sunday()) % 7;

    let mut out = Vec::new();
    let mut d = first.checked_add_days(Days::new(offset as u64));

    while let Some(day) = d {
        if day.month() != first.month() {
            break;
        }
        out.push(day);
        d = day.checked_add_days(Days::new(7));
    }

    out
}

/// Sheet title for a month, e.g. "Nov 2025".
pub fn month_label(month: NaiveDate) -> String {
    month.format("%b %Y").to_string()
}
