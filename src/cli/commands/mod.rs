pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod login;
pub mod logout;
pub mod show;
pub mod stats;
pub mod status;
pub mod sync;

use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::core::filter::FilterQuery;
use crate::core::session::{FileSessionStore, SessionGuard};
use crate::errors::{AppError, AppResult};
use crate::store::{RecordStore, open_store};
use crate::ui::messages::warning;
use chrono::Duration;

/// Session guard over the session file in the config directory.
pub(crate) fn session_guard(cfg: &Config) -> AppResult<SessionGuard<FileSessionStore>> {
    Ok(SessionGuard::new(
        FileSessionStore::new(Config::session_file()),
        session_timeout(cfg.session_timeout_hours)?,
    ))
}

/// `session_timeout_hours` as a duration; must be positive and representable.
pub(crate) fn session_timeout(hours: i64) -> AppResult<Duration> {
    if hours <= 0 {
        return Err(AppError::Config(format!(
            "session_timeout_hours must be greater than 0 (got {})",
            hours
        )));
    }
    Duration::try_hours(hours).ok_or_else(|| {
        AppError::Config(format!("session_timeout_hours is too large (got {})", hours))
    })
}

/// Gate for every command that shows or exports records.
pub(crate) fn require_session(cfg: &Config) -> AppResult<()> {
    if session_guard(cfg)?.is_authenticated() {
        Ok(())
    } else {
        Err(AppError::NotAuthenticated)
    }
}

/// Authorize, build the configured store and load every record.
pub(crate) fn load_dashboard(cfg: &Config) -> AppResult<Dashboard<Box<dyn RecordStore>>> {
    require_session(cfg)?;

    let store = open_store(cfg, cfg.source)?;
    let mut dashboard = Dashboard::new(store);
    dashboard.load()?;
    Ok(dashboard)
}

/// Build the filter from command options, warning about an unusable date.
pub(crate) fn filter_query(name: &Option<String>, date: &Option<String>) -> FilterQuery {
    let query = FilterQuery::new(name.as_deref(), date.as_deref());
    if query.has_invalid_date() {
        warning(format!(
            "'{}' is not a valid date (YYYY-MM-DD): no record can match.",
            date.as_deref().unwrap_or_default()
        ));
    }
    query
}
