use super::{MenuStore, PersistenceError, PersistenceResult};
use crate::menu::{DayRecord, ScheduleDocument};
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

pub struct SqliteMenuStore {
    connection: Mutex<Connection>,
}

impl SqliteMenuStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    pub fn in_memory() -> PersistenceResult<Self> {
        let connection = Connection::open_in_memory()?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            PRAGMA foreign_keys = ON;
            CREATE TABLE IF NOT EXISTS menus (
                id INTEGER PRIMARY KEY,
                month TEXT NOT NULL,
                year INTEGER NOT NULL,
                UNIQUE (month, year)
            );
            CREATE TABLE IF NOT EXISTS menu_days (
                menu_id INTEGER NOT NULL REFERENCES menus(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                day_json TEXT NOT NULL,
                PRIMARY KEY (menu_id, date)
            );
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }

    fn lock(&self) -> PersistenceResult<std::sync::MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| PersistenceError::InvalidData("sqlite connection mutex poisoned".into()))
    }
}

impl MenuStore for SqliteMenuStore {
    fn save_menu(&self, document: &ScheduleDocument) -> PersistenceResult<()> {
        super::validate_menu(document)?;
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute(
            "DELETE FROM menus WHERE month = ?1 AND year = ?2",
            params![document.month, document.year],
        )?;
        tx.execute(
            "INSERT INTO menus (month, year) VALUES (?1, ?2)",
            params![document.month, document.year],
        )?;
        let menu_id = tx.last_insert_rowid();
        {
            let mut stmt =
                tx.prepare("INSERT INTO menu_days (menu_id, date, day_json) VALUES (?1, ?2, ?3)")?;
            for day in &document.days {
                let json = serde_json::to_string(day)?;
                stmt.execute(params![menu_id, day.date.to_string(), json])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn load_menu(&self, month: &str, year: i32) -> PersistenceResult<Option<ScheduleDocument>> {
        let conn = self.lock()?;

        let menu_id: Option<i64> = conn
            .query_row(
                "SELECT id FROM menus WHERE month = ?1 AND year = ?2",
                params![month, year],
                |row| row.get(0),
            )
            .optional()?;
        let Some(menu_id) = menu_id else {
            return Ok(None);
        };

        let mut stmt =
            conn.prepare("SELECT day_json FROM menu_days WHERE menu_id = ?1 ORDER BY date ASC")?;
        let rows = stmt.query_map(params![menu_id], |row| row.get::<_, String>(0))?;

        let mut days = Vec::new();
        for json in rows {
            let day: DayRecord = serde_json::from_str(&json?)?;
            days.push(day);
        }

        let document = ScheduleDocument {
            month: month.to_string(),
            year,
            days,
        };
        super::validate_menu(&document)?;
        Ok(Some(document))
    }
}
