// src/export/model.rs

use crate::models::student::StudentRecord;
use serde::Serialize;

/// Flat row used by the CSV / JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StudentExport {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub student_id: Option<String>,
    pub average_grade: Option<f64>,
    pub has_graduated: Option<bool>,
    pub photo_path: Option<String>,
}

impl From<&StudentRecord> for StudentExport {
    fn from(s: &StudentRecord) -> Self {
        Self {
            id: s.id,
            full_name: s.full_name.clone(),
            student_id: s.student_id.clone(),
            average_grade: s.average_grade,
            has_graduated: s.has_graduated,
            photo_path: s.photo_path.clone(),
        }
    }
}
