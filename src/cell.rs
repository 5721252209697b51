use crate::locale::MenuLocale;

/// One table cell interpreted as a day's menu, before any date is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub notes: Vec<String>,
    pub first_course: String,
    pub second_course: String,
    pub dessert: String,
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
    #[error("day line '{line}' has no numeric day after the marker")]
    InvalidDayNumber { line: String },
}

/// Parse one raw cell.
///
/// `Ok(None)` means the cell is not a day (blank, a single line, or no day
/// marker). A marker line without a usable day number is an error for this
/// cell only.
pub fn parse_cell(text: &str, locale: &MenuLocale) -> Result<Option<DayCell>, CellError> {
    let raw = text.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let [day_line, middle @ .., dessert] = lines.as_slice() else {
        return Ok(None);
    };

    let Some(after_marker) = day_line.strip_prefix(locale.day_marker()) else {
        return Ok(None);
    };
    let day = after_marker
        .split_whitespace()
        .next()
        .and_then(|token| token.parse::<u32>().ok())
        .ok_or_else(|| CellError::InvalidDayNumber {
            line: day_line.to_string(),
        })?;

    let mut notes = Vec::new();
    if day_line.contains(locale.dietary_exception()) {
        notes.push(locale.dietary_exception().to_string());
    }

    let mut dishes = group_dishes(middle.iter().copied()).into_iter();
    let first_course = dishes.next().unwrap_or_default();
    let second_course = dishes.collect::<Vec<_>>().join(" ");

    Ok(Some(DayCell {
        day,
        notes,
        first_course,
        second_course,
        dessert: dessert.to_string(),
        raw: raw.to_string(),
    }))
}

/// Split dish lines into dishes. A capitalised line opens a new dish unless
/// it is the very first line; every other line continues the open dish.
pub fn group_dishes<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut grouper = DishGrouper::default();
    for line in lines {
        grouper.feed(line);
    }
    grouper.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Starts with an upper-case letter.
    Heading,
    Continuation,
}

impl LineClass {
    pub fn of(line: &str) -> Self {
        if line.chars().next().is_some_and(char::is_uppercase) {
            LineClass::Heading
        } else {
            LineClass::Continuation
        }
    }
}

#[derive(Debug, Default)]
enum GrouperState {
    #[default]
    AwaitingFirstDish,
    InDish(Vec<String>),
}

#[derive(Debug, Default)]
pub struct DishGrouper {
    state: GrouperState,
    dishes: Vec<String>,
}

impl DishGrouper {
    pub fn feed(&mut self, line: &str) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, LineClass::of(line)) {
            (GrouperState::AwaitingFirstDish, _) => GrouperState::InDish(vec![line.to_string()]),
            (GrouperState::InDish(open), LineClass::Heading) => {
                self.dishes.push(open.join(" "));
                GrouperState::InDish(vec![line.to_string()])
            }
            (GrouperState::InDish(mut open), LineClass::Continuation) => {
                open.push(line.to_string());
                GrouperState::InDish(open)
            }
        };
    }

    pub fn finish(mut self) -> Vec<String> {
        if let GrouperState::InDish(open) = self.state {
            self.dishes.push(open.join(" "));
        }
        self.dishes
    }
}
