use crate::db::pool::main_db_path;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Table name used by the mobile app this tool inherits data from.
const LEGACY_TABLE: &str = "StudentModel";

const V_CREATE_STUDENTS: &str = "20260301_0001_create_students";
const V_INDEX_STUDENT_ID: &str = "20260301_0002_index_student_id";
const V_IMPORT_LEGACY: &str = "20260415_0003_import_legacy_student_model";

/// Ensure that the `log` table exists. Migrations are tracked there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    let now = chrono::Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [now.as_str(), version, message],
    )?;
    Ok(())
}

/// Create the `students` table.
fn create_students_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS students (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name     TEXT,
            student_id    TEXT,
            average_grade REAL,
            has_graduated INTEGER,
            photo_path    TEXT
        );
        "#,
    )?;
    Ok(())
}

fn create_student_id_index(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_students_student_id ON students(student_id);",
    )?;
    Ok(())
}

/// Move rows from the mobile app's `StudentModel` table into `students`.
///
/// Original ids are kept when `students` is still empty, otherwise the rows
/// are appended with fresh ids.
fn import_legacy_table(conn: &Connection) -> AppResult<usize> {
    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;

    let id_column = if existing == 0 { "id, " } else { "" };
    let uid_column = if existing == 0 { "uid, " } else { "" };

    let legacy_rows: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {LEGACY_TABLE}"),
        [],
        |row| row.get(0),
    )?;

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(&format!(
        r#"
        INSERT INTO students ({id_column}full_name, student_id, average_grade, has_graduated, photo_path)
        SELECT {uid_column}hoten, mssv, diemTB, daratruong, photoPath
        FROM {LEGACY_TABLE}
        ORDER BY uid ASC;

        DROP TABLE {LEGACY_TABLE};
        "#
    ))?;
    tx.commit()?;

    Ok(legacy_rows as usize)
}

fn backup_err(stage: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Migration(format!("Backup failed ({}): {}", stage, e))
}

/// Zip the database file next to itself before a destructive migration.
fn backup_before_migration(db_path: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let backup_name = format!(
        "{}-backup_db_pre_legacy_import.zip",
        Local::now().format("%Y%m%d_%H%M%S")
    );

    let backup_path = std::path::Path::new(db_path)
        .parent()
        .ok_or_else(|| AppError::Migration(format!("No parent directory for {}", db_path)))?
        .join(&backup_name);

    let file = File::create(&backup_path).map_err(|e| backup_err("create", e))?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| backup_err("start_file", e))?;

    let db_content = fs::read(db_path).map_err(|e| backup_err("read", e))?;
    zip.write_all(&db_content)
        .map_err(|e| backup_err("write_all", e))?;
    zip.finish().map_err(|e| backup_err("finish", e))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    if !is_applied(conn, V_CREATE_STUDENTS)? {
        let had_table = table_exists(conn, "students")?;
        create_students_table(conn)?;
        mark_applied(conn, V_CREATE_STUDENTS, "Created students table")?;
        if !had_table {
            success("Created students table.");
        }
    }

    if !is_applied(conn, V_INDEX_STUDENT_ID)? {
        create_student_id_index(conn)?;
        mark_applied(conn, V_INDEX_STUDENT_ID, "Indexed students.student_id")?;
    }

    // 3) Data left behind by the mobile app
    if !is_applied(conn, V_IMPORT_LEGACY)? {
        if table_exists(conn, LEGACY_TABLE)? {
            warning("Legacy StudentModel table detected — creating safety backup before import...");

            let db_path = main_db_path(conn);

            if !db_path.is_empty() {
                backup_before_migration(&db_path)?;
            } else {
                warning("Could not determine DB path — backup skipped.");
            }

            let moved = import_legacy_table(conn)?;
            success(format!("Imported {} student(s) from {}.", moved, LEGACY_TABLE));
        }

        mark_applied(conn, V_IMPORT_LEGACY, "Checked for legacy StudentModel table")?;
    }

    Ok(())
}
