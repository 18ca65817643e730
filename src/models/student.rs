use serde::Serialize;

/// A single student row.
///
/// Every field except `id` may be absent. `id` is `None` until the store
/// assigns one on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StudentRecord {
    pub id: Option<i64>,                // ⇔ students.id (INTEGER PK AUTOINCREMENT)
    pub full_name: Option<String>,      // ⇔ students.full_name (TEXT)
    pub student_id: Option<String>,     // ⇔ students.student_id (TEXT, not unique)
    pub average_grade: Option<f64>,     // ⇔ students.average_grade (REAL)
    pub has_graduated: Option<bool>,    // ⇔ students.has_graduated (INTEGER 0/1)
    pub photo_path: Option<String>,     // ⇔ students.photo_path (TEXT, opaque)
}

impl StudentRecord {
    /// Same content, no identifier. Handy when re-inserting a copy.
    pub fn without_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    /// `true` when both records carry the same non-id values.
    pub fn same_content(&self, other: &StudentRecord) -> bool {
        self.without_id() == other.without_id()
    }

    /// Photo path to hand to an image renderer, if any.
    pub fn photo(&self) -> Option<&str> {
        self.photo_path.as_deref().filter(|p| !p.is_empty())
    }
}

/// Raw user input for a student, as typed in an add/edit form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StudentForm {
    pub full_name: String,
    pub student_id: String,
    pub average_grade: String,
    pub has_graduated: bool,
    pub photo_path: String,
}

impl StudentForm {
    /// Prefill a form from a stored record.
    pub fn from_record(rec: &StudentRecord) -> Self {
        Self {
            full_name: rec.full_name.clone().unwrap_or_default(),
            student_id: rec.student_id.clone().unwrap_or_default(),
            average_grade: rec
                .average_grade
                .map(|g| g.to_string())
                .unwrap_or_else(|| "0".to_string()),
            has_graduated: rec.has_graduated.unwrap_or(false),
            photo_path: rec.photo_path.clone().unwrap_or_default(),
        }
    }

    /// Build a new record (no id yet).
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            id: None,
            full_name: Some(self.full_name.clone()),
            student_id: Some(self.student_id.clone()),
            average_grade: Some(parse_grade(&self.average_grade)),
            has_graduated: Some(self.has_graduated),
            photo_path: Some(self.photo_path.clone()),
        }
    }

    /// Full replace of `original`'s fields, keeping its id.
    pub fn into_update(self, original: &StudentRecord) -> StudentRecord {
        StudentRecord {
            id: original.id,
            ..self.to_record()
        }
    }
}

/// Parse a user-entered average grade.
///
/// Anything that is not a number (including an empty string or surrounding
/// whitespace) becomes 0.0.
pub fn parse_grade(input: &str) -> f64 {
    input.parse::<f64>().unwrap_or(0.0)
}
