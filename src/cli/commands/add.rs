use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;
use crate::models::student::StudentForm;

/// Add a new student from the given fields. Missing text fields are empty.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        sid,
        grade,
        graduated,
        photo,
    } = cmd
    {
        let form = StudentForm {
            full_name: name.clone().unwrap_or_default(),
            student_id: sid.clone().unwrap_or_default(),
            average_grade: grade.clone().unwrap_or_default(),
            has_graduated: *graduated,
            photo_path: photo.clone().unwrap_or_default(),
        };

        let mut screen = StudentScreen::open(cfg)?;
        AddLogic::apply(&mut screen, &form, cfg)?;
        screen.close()?;
    }

    Ok(())
}
