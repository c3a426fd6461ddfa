//! Internal journal: every command that changes state leaves a line in the
//! SQLite `log` table.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::path::ensure_parent_dir;
use chrono::Local;
use rusqlite::{Connection, params};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct Journal {
    pub conn: Connection,
}

impl Journal {
    /// Open (or create) the journal database and make sure the `log` table exists.
    pub fn open(path: &Path) -> AppResult<Self> {
        ensure_parent_dir(path)?;
        let conn = Connection::open(path)?;
        ensure_log_table(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_log_table(&conn)?;
        Ok(Self { conn })
    }

    pub fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }

    /// Like `record`, but a failed write only prints a warning.
    pub fn note(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.record(operation, target, message) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }

    /// All rows, oldest first.
    pub fn rows(&self) -> AppResult<Vec<JournalRow>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(JournalRow {
                id: row.get(0)?,
                date: row.get(1)?,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }
}

fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // local timestamp, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}
