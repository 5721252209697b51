use crate::menu::ScheduleDocument;
use chrono::Datelike;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct DocumentValidationError {
    message: String,
}

impl DocumentValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Check the invariants every stored or loaded document must hold:
/// `dia` agrees with the date, and dates are strictly ascending.
pub fn validate_document(document: &ScheduleDocument) -> Result<(), DocumentValidationError> {
    for day in &document.days {
        if day.day != day.date.day() {
            return Err(DocumentValidationError::new(format!(
                "dia {} does not match date {}",
                day.day, day.date
            )));
        }
    }

    for pair in document.days.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if prev.date == next.date {
            return Err(DocumentValidationError::new(format!(
                "duplicate date {}",
                next.date
            )));
        }
        if prev.date > next.date {
            return Err(DocumentValidationError::new(format!(
                "dates out of order: {} before {}",
                prev.date, next.date
            )));
        }
    }
    Ok(())
}
