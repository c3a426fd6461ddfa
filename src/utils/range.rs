// src/utils/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::next_month;
use chrono::{Days, NaiveDate};

/// Parse a range expression into inclusive date bounds.
///
/// Supported shapes:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `YYYY:YYYY`
/// - `YYYY-MM:YYYY-MM`
/// - `YYYY-MM-DD:YYYY-MM-DD`
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have same format"));
        }

        (period_bounds(start)?.0, period_bounds(end)?.1)
    } else {
        period_bounds(r.trim())?
    };

    if end < start {
        return Err(invalid(&format!("{start} is after {end}")));
    }

    Ok((start, end))
}

/// First and last day of a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d1 = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid("invalid month"))?;
            let d2 = next_month(d1)
                .and_then(|n| n.checked_sub_days(Days::new(1)))
                .ok_or_else(|| invalid("invalid month"))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported range format")),
    }
}

fn invalid(msg: &str) -> AppError {
    AppError::InvalidRange(msg.to_string())
}
