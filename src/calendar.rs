use crate::locale::MenuLocale;
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, warn};

static MONTH_YEAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\p{Alphabetic}+).*?([0-9]{4})").expect("month/year pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid date: day {day} does not exist in {month} {year}")]
    InvalidDate { day: u32, month: String, year: i32 },
}

/// Derive `(month name, year)` from a free-form identifier such as a file name.
///
/// Only the file stem is inspected. The first alphabetic run followed later by
/// four digits wins; anything else falls back to the locale's unknown-month
/// sentinel and the current year.
pub fn resolve_month_year(identifier: &str, locale: &MenuLocale) -> (String, i32) {
    let stem = Path::new(identifier)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(identifier);

    if let Some(caps) = MONTH_YEAR_PATTERN.captures(stem) {
        if let Ok(year) = caps[2].parse::<i32>() {
            let month = caps[1].to_lowercase();
            debug!(identifier, %month, year, "resolved month and year");
            return (month, year);
        }
    }

    let year = Local::now().year();
    warn!(identifier, year, "could not resolve month/year, using fallback");
    (locale.unknown_month().to_string(), year)
}

/// Convert a day of month plus month name into a calendar date.
///
/// Unknown month names map to month 1. Impossible dates are an error.
pub fn day_to_date(
    day: u32,
    month: &str,
    year: i32,
    locale: &MenuLocale,
) -> Result<NaiveDate, CalendarError> {
    let month_number = locale.month_number(month).unwrap_or(1);
    NaiveDate::from_ymd_opt(year, month_number, day).ok_or_else(|| CalendarError::InvalidDate {
        day,
        month: month.to_string(),
        year,
    })
}
