use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One school day's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weekday: String,
    #[serde(rename = "dia")]
    pub day: u32,
    #[serde(rename = "primer")]
    pub first_course: String,
    #[serde(rename = "segon")]
    pub second_course: String,
    #[serde(rename = "postre")]
    pub dessert: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    #[serde(rename = "raw")]
    raw_text: String,
}

impl DayRecord {
    pub fn new(date: NaiveDate, weekday: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            date,
            weekday: weekday.into(),
            day: date.day(),
            first_course: String::new(),
            second_course: String::new(),
            dessert: String::new(),
            notes: Vec::new(),
            raw_text: raw_text.into(),
        }
    }

    /// The cell text this record was parsed from. Never rewritten.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// A month's parsed menu, days sorted ascending by date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    pub month: String,
    pub year: i32,
    pub days: Vec<DayRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.first, self.last)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no schedule for {date} (document covers {})", describe_range(.range))]
    NoScheduleForDate {
        date: NaiveDate,
        range: Option<DateRange>,
    },
}

fn describe_range(range: &Option<DateRange>) -> String {
    match range {
        Some(range) => range.to_string(),
        None => "no dates".to_string(),
    }
}

impl ScheduleDocument {
    pub fn empty(month: impl Into<String>, year: i32) -> Self {
        Self {
            month: month.into(),
            year,
            days: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn date_range(&self) -> Option<DateRange> {
        let first = self.days.first()?.date;
        let last = self.days.last()?.date;
        Some(DateRange { first, last })
    }

    /// Exact-date lookup.
    pub fn day_for(&self, date: NaiveDate) -> Result<&DayRecord, LookupError> {
        self.days
            .iter()
            .find(|day| day.date == date)
            .ok_or(LookupError::NoScheduleForDate {
                date,
                range: self.date_range(),
            })
    }
}
