use crate::menu::{DayRecord, ScheduleDocument};
use std::io::{self, BufRead, Write};
use tracing::info;

/// Replacement text for the three editable fields of a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Courses {
    pub first_course: String,
    pub second_course: String,
    pub dessert: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Keep,
    Replace(Courses),
}

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review io error: {0}")]
    Io(#[from] io::Error),
}

pub trait DayReviewer {
    fn review_day(&mut self, day: &DayRecord) -> Result<Verdict, ReviewError>;

    fn start(&mut self, _document: &ScheduleDocument) -> Result<(), ReviewError> {
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReviewError> {
        Ok(())
    }
}

/// Walk every day through `reviewer` and return the corrected document.
///
/// Month, year and day order are untouched; only the course fields can be
/// replaced.
pub fn review_schedule<R>(
    mut document: ScheduleDocument,
    reviewer: &mut R,
) -> Result<ScheduleDocument, ReviewError>
where
    R: DayReviewer + ?Sized,
{
    reviewer.start(&document)?;
    let mut corrected = 0usize;
    for day in document.days.iter_mut() {
        if let Verdict::Replace(courses) = reviewer.review_day(day)? {
            day.first_course = courses.first_course;
            day.second_course = courses.second_course;
            day.dessert = courses.dessert;
            corrected += 1;
        }
    }
    reviewer.finish()?;
    info!(days = document.days.len(), corrected, "review complete");
    Ok(document)
}

/// Line-oriented reviewer: shows each day, asks whether it is correct and,
/// if not, prompts for each course with Enter keeping the current value.
pub struct TerminalReviewer<R, W> {
    input: R,
    output: W,
}

const RULE: &str = "============================================================";

impl<R: BufRead, W: Write> TerminalReviewer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>, ReviewError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn confirm(&mut self, question: &str) -> Result<bool, ReviewError> {
        loop {
            write!(self.output, "{question} [Y/n]: ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(true);
            };
            match answer.to_lowercase().as_str() {
                "" | "y" | "yes" | "s" | "si" | "sí" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    fn prompt(&mut self, label: &str, current: &str) -> Result<String, ReviewError> {
        write!(self.output, "  {label}: ")?;
        self.output.flush()?;
        Ok(match self.read_line()? {
            Some(answer) if !answer.is_empty() => answer,
            _ => current.to_string(),
        })
    }
}

impl<R: BufRead, W: Write> DayReviewer for TerminalReviewer<R, W> {
    fn start(&mut self, document: &ScheduleDocument) -> Result<(), ReviewError> {
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "Reviewing {} {}", document.month, document.year)?;
        writeln!(self.output, "{RULE}")?;
        writeln!(
            self.output,
            "Confirm each day, or answer 'n' to correct it (Enter keeps a value)."
        )?;
        Ok(())
    }

    fn review_day(&mut self, day: &DayRecord) -> Result<Verdict, ReviewError> {
        writeln!(self.output)?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "{} {} ({})", day.weekday, day.day, day.date)?;
        writeln!(self.output, "{RULE}")?;
        if !day.notes.is_empty() {
            writeln!(self.output, "Notes: {}", day.notes.join(", "))?;
        }
        writeln!(self.output, "  First course : {}", day.first_course)?;
        writeln!(self.output, "  Second course: {}", day.second_course)?;
        writeln!(self.output, "  Dessert      : {}", day.dessert)?;

        if self.confirm("Is this correct?")? {
            return Ok(Verdict::Keep);
        }

        writeln!(self.output, "Correct the fields (Enter keeps the current value):")?;
        let first_course = self.prompt("First course", &day.first_course)?;
        let second_course = self.prompt("Second course", &day.second_course)?;
        let dessert = self.prompt("Dessert", &day.dessert)?;
        Ok(Verdict::Replace(Courses {
            first_course,
            second_course,
            dessert,
        }))
    }

    fn finish(&mut self) -> Result<(), ReviewError> {
        writeln!(self.output)?;
        writeln!(self.output, "Review complete.")?;
        self.output.flush()?;
        Ok(())
    }
}
