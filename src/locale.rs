use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;

/// Lookup tables and marker phrases for one source-document language.
///
/// The parser never hard-codes month names, weekday headers or the day
/// marker; everything goes through a `MenuLocale` so a different school's
/// documents can be handled by loading another table from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuLocale {
    /// Month names in calendar order, lower-case. Index 0 is month 1.
    months: Vec<String>,
    /// Raw table header label paired with its display form.
    weekdays: Vec<(String, String)>,
    day_marker: String,
    dietary_exception: String,
    unknown_month: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("locale io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid locale json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("locale must list exactly 12 months (got {0})")]
    MonthCount(usize),
    #[error("locale day marker must not be empty")]
    EmptyDayMarker,
}

impl Default for MenuLocale {
    fn default() -> Self {
        Self::catalan()
    }
}

impl MenuLocale {
    pub fn catalan() -> Self {
        let months = [
            "gener", "febrer", "març", "abril", "maig", "juny", "juliol", "agost", "setembre",
            "octubre", "novembre", "desembre",
        ];
        let weekdays = [
            ("DILLUNS", "Dilluns"),
            ("DIMARTS", "Dimarts"),
            ("DIMECRES", "Dimecres"),
            ("DIJOUS", "Dijous"),
            ("DIVENDRES", "Divendres"),
        ];
        Self {
            months: months.iter().map(|m| m.to_string()).collect(),
            weekdays: weekdays
                .iter()
                .map(|(raw, display)| (raw.to_string(), display.to_string()))
                .collect(),
            day_marker: "DIA".to_string(),
            dietary_exception: "sense proteïna animal".to_string(),
            unknown_month: "unknown".to_string(),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LocaleError> {
        let file = File::open(path)?;
        let mut locale: MenuLocale = serde_json::from_reader(file)?;
        locale.normalize_months();
        locale.validate()?;
        Ok(locale)
    }

    /// Month names are stored trimmed and lower-case so file names and
    /// lookups agree regardless of how the table was written.
    fn normalize_months(&mut self) {
        for month in &mut self.months {
            *month = month.trim().to_lowercase();
        }
    }

    pub fn validate(&self) -> Result<(), LocaleError> {
        if self.months.len() != 12 {
            return Err(LocaleError::MonthCount(self.months.len()));
        }
        if self.day_marker.trim().is_empty() {
            return Err(LocaleError::EmptyDayMarker);
        }
        Ok(())
    }

    /// Month number (1-12) for a month name, compared case-insensitively.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        let wanted = name.trim().to_lowercase();
        self.months
            .iter()
            .position(|m| m.trim().to_lowercase() == wanted)
            .map(|idx| idx as u32 + 1)
    }

    pub fn month_name(&self, number: u32) -> Option<&str> {
        let idx = number.checked_sub(1)? as usize;
        self.months.get(idx).map(String::as_str)
    }

    /// Display form of a weekday header. Unknown labels pass through trimmed.
    pub fn weekday_display(&self, label: &str) -> String {
        let label = label.trim();
        self.weekdays
            .iter()
            .find(|(raw, _)| raw == label)
            .map(|(_, display)| display.clone())
            .unwrap_or_else(|| label.to_string())
    }

    pub fn day_marker(&self) -> &str {
        &self.day_marker
    }

    pub fn dietary_exception(&self) -> &str {
        &self.dietary_exception
    }

    pub fn unknown_month(&self) -> &str {
        &self.unknown_month
    }
}
