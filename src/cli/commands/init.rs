use crate::config::Config;
use crate::db::log;
use crate::db::store::StudentStore;
use crate::errors::AppResult;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database.clone();

    println!("⚙️  Initializing rStudents…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &db_path);

    // Opening the store creates the file and runs the migrations
    let store = StudentStore::open(&db_path)?;

    println!("✅ Database initialized at {}", &db_path);

    // Internal log (non blocking)
    if let Err(e) = log::ttlog(
        &store.pool().conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rStudents initialization completed!");
    Ok(())
}
