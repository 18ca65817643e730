use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare a freshly opened connection.
///
/// Schema creation and upgrades belong to the migration engine; afterwards
/// the `students` table must be readable, otherwise the store is unusable.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    conn.query_row("SELECT COUNT(*) FROM students", [], |row| {
        row.get::<_, i64>(0)
    })?;

    Ok(())
}
