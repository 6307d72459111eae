use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sync::import_file;
use crate::db::initialize::open_ready;
use crate::db::log::audit;
use crate::db::queries::count_checkins;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let mut pool = open_ready(&cfg.database)?;

        let imported = import_file(&path, &mut pool)?;
        let total = count_checkins(&pool.conn)?;

        if let Err(e) = audit(
            &pool.conn,
            "import",
            &path.display().to_string(),
            &format!("Imported {} records", imported),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        success(format!(
            "Imported {} records ({} in cache)",
            imported, total
        ));
    }
    Ok(())
}
