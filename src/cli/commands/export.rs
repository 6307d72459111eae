use crate::cli::commands::{filter_query, load_dashboard};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date::today;
use crate::utils::path::resolve_output;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        name,
        date,
        force,
    } = cmd
    {
        let mut dashboard = load_dashboard(cfg)?;
        dashboard.apply_filter(filter_query(name, date));

        let file_name = file
            .clone()
            .unwrap_or_else(|| format.default_file_name(today()));
        let path = resolve_output(&file_name).map_err(|e| AppError::Export(e.to_string()))?;

        ExportLogic::export(dashboard.filtered_records(), *format, &path, *force)?;

        audit_quiet(
            &cfg.database,
            "export",
            format.as_str(),
            &format!(
                "Exported {} records to {}",
                dashboard.total(),
                path.display()
            ),
        );
    }
    Ok(())
}
