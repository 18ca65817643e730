// src/export/logic.rs

use crate::db::log::ttlog_soft;
use crate::db::store::StudentStore;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::StudentExport;
use crate::ui::messages::warning;
use crate::utils::path::absolutize;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write a snapshot of every student to `file`.
    ///
    /// - `format`: explicit format, or `None` to infer it from the extension
    /// - `file`: output path; relative paths resolve against the working dir
    /// - `force`: overwrite without asking
    ///
    /// Returns `None` when there was nothing to export.
    pub fn export(
        store: &StudentStore,
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = absolutize(file)?;

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(&path)?,
        };

        ensure_writable(&path, force)?;

        let rows: Vec<StudentExport> = store
            .list_all()?
            .iter()
            .map(StudentExport::from)
            .collect();

        if rows.is_empty() {
            warning("No students to export.");
            return Ok(None);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_soft(
            &store.pool().conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} student(s) as {}", rows.len(), format.as_str()),
        );

        Ok(Some(path))
    }
}
