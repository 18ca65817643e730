use crate::config::Config;
use crate::models::student::StudentRecord;
use crate::utils::formatting::{format_grade, graduated_label, text_or_placeholder};
use crate::utils::table::{Column, Table};

pub struct ListLogic;

impl ListLogic {
    /// Tabular view of the list: id, name, student id, grade, graduated.
    pub fn render(students: &[StudentRecord], cfg: &Config) -> String {
        let separator = cfg.separator_char.chars().next().unwrap_or('-');

        let mut table = Table::new(
            vec![
                Column::new("ID"),
                Column::new("Full name"),
                Column::new("Student ID"),
                Column::new("Avg grade"),
                Column::new("Graduated"),
            ],
            separator,
        );

        for s in students {
            table.add_row(vec![
                s.id.map(|id| id.to_string()).unwrap_or_default(),
                text_or_placeholder(s.full_name.as_deref()),
                text_or_placeholder(s.student_id.as_deref()),
                format_grade(s.average_grade, cfg.grade_decimals),
                graduated_label(s.has_graduated).to_string(),
            ]);
        }

        table.render()
    }

    pub fn print(students: &[StudentRecord], cfg: &Config) {
        if students.is_empty() {
            println!("No students.");
            return;
        }

        print!("{}", Self::render(students, cfg));
        println!("{} student(s)", students.len());
    }
}
