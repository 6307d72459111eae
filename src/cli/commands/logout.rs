use crate::cli::commands::session_guard;
use crate::config::Config;
use crate::db::log::audit_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let guard = session_guard(cfg)?;
    let was_active = guard.is_authenticated();

    guard.logout()?;

    if was_active {
        audit_quiet(&cfg.database, "logout", "", "Admin signed out");
        success("Signed out.");
    } else {
        info("No active session.");
    }
    info("Run `rcheckin login` to sign in again.");
    Ok(())
}
