//! Presentation state for the student list.
//!
//! Holds the last snapshot returned by the store and refreshes it after
//! every mutation (pull-based, like the list screen it replaces). All
//! storage calls go through the [`StoreWorker`], never the caller's thread.

use crate::config::Config;
use crate::db::{StoreWorker, StudentStore};
use crate::errors::AppResult;
use crate::models::student::{StudentForm, StudentRecord};

pub struct StudentScreen {
    worker: StoreWorker,
    students: Vec<StudentRecord>,
}

impl StudentScreen {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let store = StudentStore::open(&cfg.database)?;
        Self::with_store(store)
    }

    pub fn with_store(store: StudentStore) -> AppResult<Self> {
        let worker = StoreWorker::spawn(store)?;
        let mut screen = Self {
            worker,
            students: Vec::new(),
        };
        screen.refresh()?;
        Ok(screen)
    }

    /// Re-fetch the full list from the store.
    pub fn refresh(&mut self) -> AppResult<&[StudentRecord]> {
        self.students = self.worker.list_all().wait()?;
        Ok(&self.students)
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Look a student up in the current snapshot.
    pub fn find(&self, id: i64) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.id == Some(id))
    }

    /// Save the add form as a new student. Returns the assigned id.
    pub fn add(&mut self, form: &StudentForm) -> AppResult<i64> {
        let id = self.worker.insert(form.to_record()).wait()?;
        self.refresh()?;
        Ok(id)
    }

    /// Save the edit form over `original` (full replace, id kept).
    pub fn save_edit(&mut self, original: &StudentRecord, form: StudentForm) -> AppResult<bool> {
        let updated = form.into_update(original);
        let changed = self.worker.update(updated).wait()?;
        self.refresh()?;
        Ok(changed)
    }

    pub fn remove(&mut self, student: &StudentRecord) -> AppResult<bool> {
        let removed = self.worker.delete(student.clone()).wait()?;
        self.refresh()?;
        Ok(removed)
    }

    /// Tear the screen down and get the store back.
    pub fn close(self) -> AppResult<StudentStore> {
        self.worker.shutdown()
    }
}
