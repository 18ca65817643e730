use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut screen = StudentScreen::open(cfg)?;
        DeleteLogic::apply(&mut screen, *id, *yes, cfg)?;
        screen.close()?;
    }

    Ok(())
}
