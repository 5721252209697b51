use crate::menu::ScheduleDocument;
use crate::validation::{self, DocumentValidationError};
use serde_json::Error as SerdeJsonError;
use std::io;

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<DocumentValidationError> for PersistenceError {
    fn from(value: DocumentValidationError) -> Self {
        Self::InvalidData(value.to_string())
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Storage keyed by month and year. Saving a document for a month that is
/// already stored replaces it.
pub trait MenuStore {
    fn save_menu(&self, document: &ScheduleDocument) -> PersistenceResult<()>;
    fn load_menu(&self, month: &str, year: i32) -> PersistenceResult<Option<ScheduleDocument>>;
}

pub fn validate_menu(document: &ScheduleDocument) -> PersistenceResult<()> {
    validation::validate_document(document)?;
    Ok(())
}

pub mod file;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::{
    default_menu_path_for_date, default_output_path, load_menu_from_json, load_menu_from_reader,
    load_tables_from_json, save_menu_to_csv, save_menu_to_json,
};
