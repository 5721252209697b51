use crate::calendar::{CalendarError, day_to_date};
use crate::cell::{CellError, DayCell, parse_cell};
use crate::locale::MenuLocale;
use crate::menu::{DayRecord, ScheduleDocument};
use chrono::NaiveDate;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Cells of one extracted table row.
pub type RawRow = Vec<String>;
/// Rows of one extracted table; row 0 is the weekday header.
pub type RawTable = Vec<RawRow>;

/// Position of the schedule grid among the extracted tables. The first table
/// of these documents is a decorative banner.
const SCHEDULE_TABLE_INDEX: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssembleError {
    #[error("row {row}, column {column}: {source}")]
    Calendar {
        row: usize,
        column: usize,
        #[source]
        source: CalendarError,
    },
}

enum CellOutcome {
    Day(DayRecord),
    NotADay,
    Skipped {
        position: CellPosition,
        error: CellError,
    },
}

/// Row index counts the header as row 0.
#[derive(Debug, Clone, Copy)]
struct CellPosition {
    row: usize,
    column: usize,
}

/// Turn extracted tables into a sorted month document.
///
/// Missing tables or an empty grid produce an empty document. Cells beyond
/// the header width are ignored. When a date appears more than once, the
/// first cell in row-major order wins. A date that does not exist in the
/// month is an error for the whole document, reported for the first such
/// cell in row-major order.
pub fn assemble_schedule(
    tables: &[RawTable],
    month: &str,
    year: i32,
    locale: &MenuLocale,
) -> Result<ScheduleDocument, AssembleError> {
    let Some(table) = tables.get(SCHEDULE_TABLE_INDEX) else {
        debug!(tables = tables.len(), "not enough tables, nothing to parse");
        return Ok(ScheduleDocument::empty(month, year));
    };
    let Some((header, rows)) = table.split_first() else {
        debug!("schedule table is empty");
        return Ok(ScheduleDocument::empty(month, year));
    };
    if rows.is_empty() {
        debug!("schedule table has only a header row");
        return Ok(ScheduleDocument::empty(month, year));
    }

    let weekdays: Vec<String> = header
        .iter()
        .map(|label| locale.weekday_display(label))
        .collect();
    let weekdays = &weekdays;

    let outcomes = rows
        .par_iter()
        .enumerate()
        .flat_map_iter(|(row_idx, row)| {
            row.iter()
                .take(weekdays.len())
                .enumerate()
                .map(move |(column, cell)| {
                    let position = CellPosition {
                        row: row_idx + 1,
                        column,
                    };
                    assemble_cell(cell, &weekdays[column], position, month, year, locale)
                })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let cells_seen = outcomes.len();
    let mut days = Vec::with_capacity(cells_seen);
    let mut skipped = 0usize;
    for outcome in outcomes {
        match outcome {
            CellOutcome::Day(day) => days.push(day),
            CellOutcome::NotADay => {}
            CellOutcome::Skipped { position, error } => {
                skipped += 1;
                warn!(
                    row = position.row,
                    column = position.column,
                    %error,
                    "skipping malformed day cell"
                );
            }
        }
    }

    days.sort_by_key(|day| day.date);
    let before_dedup = days.len();
    days.dedup_by(|later, kept| {
        let duplicate = later.date == kept.date;
        if duplicate {
            warn!(date = %later.date, "duplicate day in schedule table, keeping the first");
        }
        duplicate
    });
    let duplicates = before_dedup - days.len();

    info!(
        month,
        year,
        cells = cells_seen,
        days = days.len(),
        skipped,
        duplicates,
        "assembled schedule"
    );

    Ok(ScheduleDocument {
        month: month.to_string(),
        year,
        days,
    })
}

fn assemble_cell(
    cell: &str,
    weekday: &str,
    position: CellPosition,
    month: &str,
    year: i32,
    locale: &MenuLocale,
) -> Result<CellOutcome, AssembleError> {
    match parse_cell(cell, locale) {
        Ok(Some(parsed)) => {
            let date = day_to_date(parsed.day, month, year, locale).map_err(|source| {
                AssembleError::Calendar {
                    row: position.row,
                    column: position.column,
                    source,
                }
            })?;
            Ok(CellOutcome::Day(into_record(parsed, date, weekday)))
        }
        Ok(None) => Ok(CellOutcome::NotADay),
        Err(error) => Ok(CellOutcome::Skipped { position, error }),
    }
}

fn into_record(cell: DayCell, date: NaiveDate, weekday: &str) -> DayRecord {
    let mut record = DayRecord::new(date, weekday, cell.raw);
    record.first_course = cell.first_course;
    record.second_course = cell.second_course;
    record.dessert = cell.dessert;
    record.notes = cell.notes;
    record
}
