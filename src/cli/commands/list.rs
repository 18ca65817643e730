use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let screen = StudentScreen::open(cfg)?;
        ListLogic::print(screen.students(), cfg);
        screen.close()?;
    }

    Ok(())
}
