use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept if it already exists)
///  - the local cache database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rCheckin…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Cache DB    : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    success(format!("Cache initialized at {}", &db_path));

    if let Err(e) = log::audit(&conn, "init", "", &format!("Cache initialized at {}", &db_path)) {
        warning(format!("Failed to write internal log: {}", e));
    }

    let cfg = Config::load()?;
    if !cfg.store.is_configured() {
        warning("Record store not configured yet: set store.url and store.anon_key (`rcheckin config --edit`).");
    }

    println!("🎉 rCheckin initialization completed!");
    Ok(())
}
