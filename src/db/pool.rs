//! SQLite connection wrapper (one connection per process).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Private in-memory database, mostly for tests and dry runs.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Path of the main database file, empty for in-memory databases.
    pub fn file_path(&self) -> String {
        main_db_path(&self.conn)
    }
}

/// Path of the `main` database attached to `conn`, empty for in-memory databases.
pub fn main_db_path(conn: &Connection) -> String {
    conn.query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default()
}
