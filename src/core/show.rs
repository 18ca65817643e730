use crate::config::Config;
use crate::models::student::StudentRecord;
use crate::utils::colors::{RESET, color_for_graduated, color_for_optional_field};
use crate::utils::formatting::{bold, format_grade, graduated_label, text_or_placeholder};

pub struct ShowLogic;

impl ShowLogic {
    /// Detail view of one student. The photo line only appears when a
    /// non-empty path is stored; the path is shown as-is, never opened.
    pub fn render(student: &StudentRecord, cfg: &Config) -> String {
        let name = student.full_name.as_deref();
        let sid = student.student_id.as_deref();

        let mut lines = vec![
            format!(
                "{} {}{}{}",
                bold("Full name:"),
                color_for_optional_field(name),
                text_or_placeholder(name),
                RESET
            ),
            format!(
                "{} {}{}{}",
                bold("Student ID:"),
                color_for_optional_field(sid),
                text_or_placeholder(sid),
                RESET
            ),
            format!(
                "{} {}",
                bold("Average grade:"),
                format_grade(student.average_grade, cfg.grade_decimals)
            ),
            format!(
                "{} {}{}{}",
                bold("Graduated:"),
                color_for_graduated(student.has_graduated),
                graduated_label(student.has_graduated),
                RESET
            ),
        ];

        if let Some(photo) = student.photo() {
            lines.push(format!("{} {}", bold("Photo:"), photo));
        }

        lines.join("\n")
    }
}
