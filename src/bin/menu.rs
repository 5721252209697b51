use anyhow::{Context, bail};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use menu_tool::{
    MenuLocale, ScheduleDocument, TerminalReviewer, assemble_schedule, default_menu_path_for_date,
    default_output_path, format_day_message, load_menu_from_json, load_menu_from_reader,
    load_tables_from_json,
    logging, resolve_month_year, review_schedule, save_menu_to_csv, save_menu_to_json,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

const DATA_DIR_ENV: &str = "MENU_TOOL_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "menu/data";
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "menu", version, about = "School menu table parser")]
struct CommandLine {
    /// JSON file with month names, weekday headers and marker phrases
    #[arg(long, global = true)]
    locale: Option<PathBuf>,

    /// Debug logging for this crate
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a month document from extracted tables
    Parse(ParseArgs),
    /// Print the message for one day
    Show(ShowArgs),
    /// List the dates in a month document
    Days {
        file: PathBuf,
    },
}

#[derive(Args)]
struct ParseArgs {
    /// JSON dump of extracted tables (tables -> rows -> cells)
    tables: PathBuf,

    /// Identifier to read month and year from (defaults to the tables file name)
    #[arg(long)]
    name: Option<String>,

    /// Output JSON (defaults to <data dir>/<name>.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also export the days as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the final document
    #[arg(long)]
    print: bool,

    /// Review and correct each day before saving
    #[arg(short, long)]
    interactive: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Month document, or `-` for stdin (defaults to <data dir>/<month>_<year>.json for the date)
    file: Option<PathBuf>,

    /// Day to show, YYYY-MM-DD (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

fn data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}

fn load_locale(path: Option<&Path>) -> anyhow::Result<MenuLocale> {
    match path {
        Some(path) => MenuLocale::from_json_file(path)
            .with_context(|| format!("loading locale from {}", path.display())),
        None => Ok(MenuLocale::default()),
    }
}

fn parse(args: ParseArgs, locale: &MenuLocale) -> anyhow::Result<()> {
    let source = args
        .name
        .clone()
        .unwrap_or_else(|| args.tables.to_string_lossy().into_owned());
    let (month, year) = resolve_month_year(&source, locale);
    println!("Detected: {month} {year}");

    let output = match args.output {
        Some(path) => path,
        None => {
            let path = default_output_path(data_dir(), &source)?;
            println!("Output: {}", path.display());
            path
        }
    };

    let tables = load_tables_from_json(&args.tables)
        .with_context(|| format!("reading tables from {}", args.tables.display()))?;
    println!("Tables read: {}", tables.len());

    let mut document = assemble_schedule(&tables, &month, year, locale)?;
    println!("Days parsed: {}", document.len());

    if args.interactive {
        let stdin = io::stdin();
        let mut reviewer = TerminalReviewer::new(stdin.lock(), io::stdout());
        document = review_schedule(document, &mut reviewer)?;
    }

    if args.print {
        println!("{}", serde_json::to_string_pretty(&document)?);
    }

    save_menu_to_json(&document, &output)
        .with_context(|| format!("saving {}", output.display()))?;
    println!("Saved to {}", output.display());

    if let Some(csv_path) = args.csv {
        save_menu_to_csv(&document, &csv_path)
            .with_context(|| format!("exporting {}", csv_path.display()))?;
        println!("CSV exported to {}", csv_path.display());
    }
    Ok(())
}

fn show(args: ShowArgs, locale: &MenuLocale) -> anyhow::Result<()> {
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let file = match args.file {
        Some(file) => file,
        None => {
            let path = default_menu_path_for_date(data_dir(), date, locale);
            if !path.exists() {
                bail!("no menu file at {}; pass one as an argument", path.display());
            }
            path
        }
    };
    info!(date = %date, file = %file.display(), "looking up day");

    let document = if file.as_os_str() == STDIN_PATH {
        load_menu_from_reader(io::stdin().lock()).context("loading menu from stdin")?
    } else {
        load_menu_from_json(&file).with_context(|| format!("loading {}", file.display()))?
    };
    let day = document.day_for(date)?;
    println!("{}", format_day_message(day, &document.month));
    Ok(())
}

fn list_days(file: &Path) -> anyhow::Result<()> {
    let document: ScheduleDocument =
        load_menu_from_json(file).with_context(|| format!("loading {}", file.display()))?;
    println!("{} {} ({} days)", document.month, document.year, document.len());
    for day in &document.days {
        let notes = if day.notes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", day.notes.join(", "))
        };
        println!("{}  {:<10} {}{}", day.date, day.weekday, day.first_course, notes);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse();
    logging::init_logging(commands.verbose);

    let locale = load_locale(commands.locale.as_deref())?;

    match commands.command {
        Commands::Parse(args) => parse(args, &locale),
        Commands::Show(args) => show(args, &locale),
        Commands::Days { file } => list_days(&file),
    }
}
