use chrono::NaiveDate;
use menu_tool::{
    DayRecord, MenuLocale, PersistenceError, ScheduleDocument, default_menu_path_for_date,
    default_output_path, load_menu_from_json, load_menu_from_reader, load_tables_from_json,
    save_menu_to_csv, save_menu_to_json,
};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::{NamedTempFile, tempdir};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn build_sample_menu() -> ScheduleDocument {
    let mut first = DayRecord::new(
        d(2025, 11, 3),
        "Dilluns",
        "DIA 3\nArròs\nblanc\nPollastre rostit\nIogurt",
    );
    first.first_course = "Arròs blanc".into();
    first.second_course = "Pollastre rostit".into();
    first.dessert = "Iogurt".into();

    let mut second = DayRecord::new(
        d(2025, 11, 5),
        "Dimecres",
        "DIA 5 sense proteïna animal\nLlenties\nFruita",
    );
    second.first_course = "Llenties".into();
    second.dessert = "Fruita".into();
    second.notes = vec!["sense proteïna animal".into()];

    ScheduleDocument {
        month: "novembre".into(),
        year: 2025,
        days: vec![first, second],
    }
}

#[test]
fn json_uses_fixed_field_names_and_omits_empty_notes() {
    let value = serde_json::to_value(build_sample_menu()).unwrap();
    assert_eq!(
        value,
        json!({
            "month": "novembre",
            "year": 2025,
            "days": [
                {
                    "date": "2025-11-03",
                    "weekday": "Dilluns",
                    "dia": 3,
                    "primer": "Arròs blanc",
                    "segon": "Pollastre rostit",
                    "postre": "Iogurt",
                    "raw": "DIA 3\nArròs\nblanc\nPollastre rostit\nIogurt"
                },
                {
                    "date": "2025-11-05",
                    "weekday": "Dimecres",
                    "dia": 5,
                    "primer": "Llenties",
                    "segon": "",
                    "postre": "Fruita",
                    "notes": ["sense proteïna animal"],
                    "raw": "DIA 5 sense proteïna animal\nLlenties\nFruita"
                }
            ]
        })
    );
}

#[test]
fn json_round_trip_preserves_menu() {
    let menu = build_sample_menu();
    let file = NamedTempFile::new().unwrap();

    save_menu_to_json(&menu, file.path()).unwrap();
    let text = fs::read_to_string(file.path()).unwrap();
    assert!(text.contains("Arròs blanc"), "non-ascii text is written verbatim");

    let loaded = load_menu_from_json(file.path()).unwrap();
    assert_eq!(loaded, menu);
}

#[test]
fn reader_load_validates_like_file_load() {
    let menu = build_sample_menu();
    let text = serde_json::to_string(&menu).unwrap();
    assert_eq!(load_menu_from_reader(text.as_bytes()).unwrap(), menu);

    let mut unsorted = menu;
    unsorted.days.reverse();
    let text = serde_json::to_string(&unsorted).unwrap();
    let err = load_menu_from_reader(text.as_bytes()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidData(_)));
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("menu").join("data").join("novembre_2025.json");
    save_menu_to_json(&build_sample_menu(), &path).unwrap();
    assert!(path.exists());
}

#[test]
fn load_rejects_unsorted_days() {
    let mut menu = build_sample_menu();
    menu.days.reverse();
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), serde_json::to_string(&menu).unwrap()).unwrap();

    let err = load_menu_from_json(file.path()).unwrap_err();
    assert!(matches!(err, PersistenceError::InvalidData(_)));
}

#[test]
fn save_rejects_day_number_mismatch() {
    let mut menu = build_sample_menu();
    menu.days[0].day = 4;
    let file = NamedTempFile::new().unwrap();
    let err = save_menu_to_json(&menu, file.path()).unwrap_err();
    assert!(err.to_string().contains("dia 4 does not match date 2025-11-03"));
}

#[test]
fn csv_export_writes_one_row_per_day() {
    let menu = build_sample_menu();
    let file = NamedTempFile::new().unwrap();
    save_menu_to_csv(&menu, file.path()).unwrap();

    let mut reader = csv::Reader::from_path(file.path()).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["date", "weekday", "dia", "primer", "segon", "postre", "notes", "raw"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][0], "2025-11-05");
    assert_eq!(&rows[1][6], "sense proteïna animal");
    assert_eq!(&rows[0][7], "DIA 3\nArròs\nblanc\nPollastre rostit\nIogurt");
}

#[test]
fn tables_dump_maps_null_cells_to_empty_strings() {
    let file = NamedTempFile::new().unwrap();
    fs::write(
        file.path(),
        r#"[[["ESCOLA"]], [["DILLUNS", null], ["DIA 3\nSopa\nPoma", null]]]"#,
    )
    .unwrap();

    let tables = load_tables_from_json(file.path()).unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[1][0], vec!["DILLUNS".to_string(), String::new()]);
    assert_eq!(tables[1][1][0], "DIA 3\nSopa\nPoma");
}

#[test]
fn default_paths_follow_data_directory_layout() {
    let locale = MenuLocale::catalan();
    assert_eq!(
        default_output_path("menu/data", "menu/pdfs/novembre_2025.pdf").unwrap(),
        Path::new("menu/data").join("novembre_2025.json")
    );
    assert_eq!(
        default_menu_path_for_date("menu/data", d(2026, 3, 9), &locale),
        Path::new("menu/data").join("març_2026.json")
    );
}
