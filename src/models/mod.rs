pub mod student;

pub use student::{StudentForm, StudentRecord, parse_grade};
