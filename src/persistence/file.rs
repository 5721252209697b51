use super::{PersistenceError, PersistenceResult};
use crate::assembler::RawTable;
use crate::locale::MenuLocale;
use crate::menu::{DayRecord, ScheduleDocument};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub fn save_menu_to_json<P: AsRef<Path>>(
    document: &ScheduleDocument,
    path: P,
) -> PersistenceResult<()> {
    super::validate_menu(document)?;
    let file = create_with_parents(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush()?;
    Ok(())
}

pub fn load_menu_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ScheduleDocument> {
    load_menu_from_reader(File::open(path)?)
}

pub fn load_menu_from_reader<R: Read>(reader: R) -> PersistenceResult<ScheduleDocument> {
    let document: ScheduleDocument = serde_json::from_reader(reader)?;
    super::validate_menu(&document)?;
    Ok(document)
}

/// Read the table extractor's dump: tables of rows of cells. `null` cells,
/// as produced for merged or blank regions, become empty strings.
pub fn load_tables_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<RawTable>> {
    let file = File::open(path)?;
    let tables: Vec<Vec<Vec<Option<String>>>> = serde_json::from_reader(file)?;
    Ok(tables
        .into_iter()
        .map(|table| {
            table
                .into_iter()
                .map(|row| row.into_iter().map(Option::unwrap_or_default).collect())
                .collect()
        })
        .collect())
}

#[derive(Serialize, Deserialize)]
struct DayCsvRecord {
    date: String,
    weekday: String,
    dia: u32,
    primer: String,
    segon: String,
    postre: String,
    notes: String,
    raw: String,
}

impl From<&DayRecord> for DayCsvRecord {
    fn from(day: &DayRecord) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            weekday: day.weekday.clone(),
            dia: day.day,
            primer: day.first_course.clone(),
            segon: day.second_course.clone(),
            postre: day.dessert.clone(),
            notes: day.notes.join(";"),
            raw: day.raw_text().to_string(),
        }
    }
}

pub fn save_menu_to_csv<P: AsRef<Path>>(
    document: &ScheduleDocument,
    path: P,
) -> PersistenceResult<()> {
    super::validate_menu(document)?;
    let file = create_with_parents(path.as_ref())?;
    let mut writer = csv::Writer::from_writer(file);
    for day in &document.days {
        writer.serialize(DayCsvRecord::from(day))?;
    }
    writer.flush()?;
    Ok(())
}

/// `<data_dir>/<source stem>.json`
pub fn default_output_path<P: AsRef<Path>>(data_dir: P, source: &str) -> PersistenceResult<PathBuf> {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PersistenceError::InvalidData(format!("no file name in '{source}'")))?;
    Ok(data_dir.as_ref().join(format!("{stem}.json")))
}

/// `<data_dir>/<month>_<year>.json` for the month containing `date`.
pub fn default_menu_path_for_date<P: AsRef<Path>>(
    data_dir: P,
    date: NaiveDate,
    locale: &MenuLocale,
) -> PathBuf {
    let month = locale
        .month_name(date.month())
        .unwrap_or(locale.unknown_month());
    data_dir
        .as_ref()
        .join(format!("{month}_{}.json", date.year()))
}

fn create_with_parents(path: &Path) -> PersistenceResult<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}
