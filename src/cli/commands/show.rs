use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::screen::StudentScreen;
use crate::core::show::ShowLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let screen = StudentScreen::open(cfg)?;
        let student = screen.find(*id).ok_or(AppError::NotFound(*id))?;

        header(format!("Student #{}", id));
        println!("{}", ShowLogic::render(student, cfg));

        screen.close()?;
    }

    Ok(())
}
