use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::store::StudentStore;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = StudentStore::open(&cfg.database)?;
        BackupLogic::backup(&store, cfg, file, *compress, *force)?;
    }

    Ok(())
}
