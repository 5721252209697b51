pub mod assembler;
pub mod calendar;
pub mod cell;
pub mod locale;
#[cfg(feature = "cli")]
pub mod logging;
pub mod menu;
pub mod message;
pub mod persistence;
pub mod review;
pub mod validation;

pub use assembler::{AssembleError, RawRow, RawTable, assemble_schedule};
pub use calendar::{CalendarError, day_to_date, resolve_month_year};
pub use cell::{CellError, DayCell, parse_cell};
pub use locale::{LocaleError, MenuLocale};
pub use menu::{DateRange, DayRecord, LookupError, ScheduleDocument};
pub use message::format_day_message;
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteMenuStore;
pub use persistence::{
    MenuStore, PersistenceError, default_menu_path_for_date, default_output_path,
    load_menu_from_json, load_menu_from_reader, load_tables_from_json, save_menu_to_csv,
    save_menu_to_json, validate_menu,
};
pub use review::{Courses, DayReviewer, ReviewError, TerminalReviewer, Verdict, review_schedule};
pub use validation::{DocumentValidationError, validate_document};
