use crate::cli::commands::require_session;
use crate::config::Config;
use crate::core::sync::sync_cache;
use crate::db::initialize::open_ready;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::store::RestStore;
use crate::ui::messages::{info, success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    require_session(cfg)?;

    let remote = RestStore::from_config(&cfg.store)?;
    let mut pool = open_ready(&cfg.database)?;

    info("Fetching records from the hosted table…");
    let count = sync_cache(&remote, &mut pool)?;

    if let Err(e) = audit(
        &pool.conn,
        "sync",
        &cfg.store.table,
        &format!("Mirrored {} records", count),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(format!("Local cache now holds {} records.", count));
    Ok(())
}
