use crate::models::student::StudentRecord;
use rusqlite::params;
use rusqlite::{Connection, OptionalExtension, Result, Row};

const SELECT_STUDENTS: &str = "SELECT id, full_name, student_id, average_grade, has_graduated, photo_path
     FROM students";

pub fn map_row(row: &Row) -> Result<StudentRecord> {
    Ok(StudentRecord {
        id: row.get("id")?,
        full_name: row.get("full_name")?,
        student_id: row.get("student_id")?,
        average_grade: row.get("average_grade")?,
        has_graduated: row.get("has_graduated")?,
        photo_path: row.get("photo_path")?,
    })
}

/// All students in storage order.
pub fn load_students(conn: &Connection) -> Result<Vec<StudentRecord>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_STUDENTS} ORDER BY id ASC"))?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert every non-id column and return the new row id.
pub fn insert_student(conn: &Connection, rec: &StudentRecord) -> Result<i64> {
    conn.execute(
        "INSERT INTO students (full_name, student_id, average_grade, has_graduated, photo_path)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            rec.full_name,
            rec.student_id,
            rec.average_grade,
            rec.has_graduated,
            rec.photo_path,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace all non-id columns of row `id`. Returns the number of rows touched.
pub fn update_student(conn: &Connection, id: i64, rec: &StudentRecord) -> Result<usize> {
    conn.execute(
        "UPDATE students
            SET full_name = ?1,
                student_id = ?2,
                average_grade = ?3,
                has_graduated = ?4,
                photo_path = ?5
          WHERE id = ?6",
        params![
            rec.full_name,
            rec.student_id,
            rec.average_grade,
            rec.has_graduated,
            rec.photo_path,
            id,
        ],
    )
}

pub fn delete_student(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM students WHERE id = ?1", [id])
}

/// Aggregate figures for `db --info`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StudentStats {
    pub total: i64,
    pub graduated: i64,
    pub mean_grade: Option<f64>,
    pub first_id: Option<i64>,
    pub last_id: Option<i64>,
}

pub fn load_stats(conn: &Connection) -> Result<StudentStats> {
    let (total, graduated, mean_grade): (i64, i64, Option<f64>) = conn.query_row(
        "SELECT COUNT(*),
                COALESCE(SUM(CASE WHEN has_graduated = 1 THEN 1 ELSE 0 END), 0),
                AVG(average_grade)
           FROM students",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    let first_id: Option<i64> = conn
        .query_row("SELECT id FROM students ORDER BY id ASC LIMIT 1", [], |row| row.get(0))
        .optional()?;
    let last_id: Option<i64> = conn
        .query_row("SELECT id FROM students ORDER BY id DESC LIMIT 1", [], |row| row.get(0))
        .optional()?;

    Ok(StudentStats {
        total,
        graduated,
        mean_grade,
        first_id,
        last_id,
    })
}

/// Rows of the internal log table, oldest first.
pub fn load_log(conn: &Connection) -> Result<Vec<(i64, String, String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
