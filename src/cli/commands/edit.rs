use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EditPatch};
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        sid,
        grade,
        graduated,
        photo,
    } = cmd
    {
        let patch = EditPatch {
            full_name: name.clone(),
            student_id: sid.clone(),
            average_grade: grade.clone(),
            has_graduated: *graduated,
            photo_path: photo.clone(),
        };

        let mut screen = StudentScreen::open(cfg)?;
        EditLogic::apply(&mut screen, *id, patch, cfg)?;
        screen.close()?;
    }

    Ok(())
}
