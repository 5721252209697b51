use menu_tool::{CellError, MenuLocale, parse_cell};

fn locale() -> MenuLocale {
    MenuLocale::catalan()
}

#[test]
fn parses_multi_line_first_course() {
    let cell = parse_cell("DIA 3\nArròs\nblanc\nPollastre rostit\nIogurt", &locale())
        .unwrap()
        .unwrap();
    assert_eq!(cell.day, 3);
    assert_eq!(cell.first_course, "Arròs blanc");
    assert_eq!(cell.second_course, "Pollastre rostit");
    assert_eq!(cell.dessert, "Iogurt");
    assert!(cell.notes.is_empty());
}

#[test]
fn dietary_exception_goes_to_notes() {
    let cell = parse_cell("DIA 5 sense proteïna animal\nLlenties\nFruita", &locale())
        .unwrap()
        .unwrap();
    assert_eq!(cell.day, 5);
    assert_eq!(cell.notes, vec!["sense proteïna animal".to_string()]);
    assert_eq!(cell.first_course, "Llenties");
    assert_eq!(cell.second_course, "");
    assert_eq!(cell.dessert, "Fruita");
}

#[test]
fn day_and_dessert_only_yields_empty_courses() {
    let cell = parse_cell("DIA 12\nFruita del temps", &locale())
        .unwrap()
        .unwrap();
    assert_eq!(cell.first_course, "");
    assert_eq!(cell.second_course, "");
    assert_eq!(cell.dessert, "Fruita del temps");
}

#[test]
fn blank_and_whitespace_cells_are_not_days() {
    assert_eq!(parse_cell("", &locale()), Ok(None));
    assert_eq!(parse_cell("   \n\t \n", &locale()), Ok(None));
}

#[test]
fn single_line_cell_is_not_a_day() {
    assert_eq!(parse_cell("DIA 4", &locale()), Ok(None));
    assert_eq!(parse_cell("\n\nDIA 4\n  \n", &locale()), Ok(None));
}

#[test]
fn cell_without_marker_is_not_a_day() {
    assert_eq!(parse_cell("FESTIU\nTancat", &locale()), Ok(None));
    assert_eq!(parse_cell("dia 4\nSopa\nPoma", &locale()), Ok(None));
}

#[test]
fn day_number_takes_first_token_only() {
    let cell = parse_cell("DIA 21 menú especial\nCanelons\nFlam", &locale())
        .unwrap()
        .unwrap();
    assert_eq!(cell.day, 21);
    assert!(cell.notes.is_empty());
}

#[test]
fn non_numeric_day_is_a_cell_error() {
    let err = parse_cell("DIA X\nSopa\nPoma", &locale()).unwrap_err();
    assert_eq!(
        err,
        CellError::InvalidDayNumber {
            line: "DIA X".to_string()
        }
    );
    assert!(parse_cell("DIA\nSopa\nPoma", &locale()).is_err());
}

#[test]
fn raw_text_is_trimmed_input() {
    let input = "\n  DIA 6\n\nCrema de carbassa\n  Lluç a la planxa \nPlàtan  \n";
    let cell = parse_cell(input, &locale()).unwrap().unwrap();
    assert_eq!(cell.raw, input.trim());
    assert_eq!(cell.first_course, "Crema de carbassa");
    assert_eq!(cell.second_course, "Lluç a la planxa");
    assert_eq!(cell.dessert, "Plàtan");
}

#[test]
fn lowercase_continuations_stay_with_their_dish() {
    let cell = parse_cell(
        "DIA 9\nEspaguetis\namb salsa de tomàquet\nMandonguilles\nde vedella\namb pèsols\nGelat",
        &locale(),
    )
    .unwrap()
    .unwrap();
    assert_eq!(cell.first_course, "Espaguetis amb salsa de tomàquet");
    assert_eq!(cell.second_course, "Mandonguilles de vedella amb pèsols");
}
