//! The student store: one table, four operations.
//!
//! The store owns its connection. Callers open it once, use it, and let it
//! drop; there is no global handle. Every successful mutation is mirrored
//! into the internal `log` table.

use crate::db::initialize::init_db;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::student::StudentRecord;

pub struct StudentStore {
    pool: DbPool,
}

impl StudentStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)
            .map_err(|e| AppError::StoreUnavailable(format!("{}: {}", path, e)))?;
        Self::from_pool(pool, path)
    }

    /// Store backed by a private in-memory database.
    pub fn open_in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()
            .map_err(|e| AppError::StoreUnavailable(format!(":memory:: {}", e)))?;
        Self::from_pool(pool, ":memory:")
    }

    fn from_pool(pool: DbPool, label: &str) -> AppResult<Self> {
        init_db(&pool.conn).map_err(|e| AppError::StoreUnavailable(format!("{}: {}", label, e)))?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Every stored student, in storage order.
    pub fn list_all(&self) -> AppResult<Vec<StudentRecord>> {
        Ok(queries::load_students(&self.pool.conn)?)
    }

    /// Persist `record` as a new row and return the id assigned to it.
    ///
    /// Any id already present on `record` is ignored; inserting the same
    /// content twice yields two rows.
    pub fn insert(&self, record: &StudentRecord) -> AppResult<i64> {
        let id = queries::insert_student(&self.pool.conn, record)?;

        ttlog_soft(
            &self.pool.conn,
            "add",
            &format!("#{}", id),
            &format!("Added student {}", describe(record)),
        );

        Ok(id)
    }

    /// Replace every non-id field of the row matching `record.id`.
    ///
    /// Returns `false` without touching anything when the record has no id
    /// or no row matches.
    pub fn update(&self, record: &StudentRecord) -> AppResult<bool> {
        let Some(id) = record.id else {
            return Ok(false);
        };

        let changed = queries::update_student(&self.pool.conn, id, record)? > 0;

        if changed {
            ttlog_soft(
                &self.pool.conn,
                "edit",
                &format!("#{}", id),
                &format!("Updated student {}", describe(record)),
            );
        }

        Ok(changed)
    }

    /// Remove the row matching `record.id`. Returns `false` if none matched.
    pub fn delete(&self, record: &StudentRecord) -> AppResult<bool> {
        let Some(id) = record.id else {
            return Ok(false);
        };

        let removed = queries::delete_student(&self.pool.conn, id)? > 0;

        if removed {
            ttlog_soft(
                &self.pool.conn,
                "del",
                &format!("#{}", id),
                &format!("Deleted student {}", describe(record)),
            );
        }

        Ok(removed)
    }
}

fn describe(record: &StudentRecord) -> String {
    let name = record.full_name.as_deref().unwrap_or("");
    let sid = record.student_id.as_deref().unwrap_or("");
    format!("'{}' ({})", name, sid)
}
