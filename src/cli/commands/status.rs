use crate::cli::commands::login::remaining;
use crate::cli::commands::session_guard;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date::now_ms;
use chrono::{Local, TimeZone};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let guard = session_guard(cfg)?;

    match guard.current() {
        Some(session) => {
            let expires = session
                .expires
                .and_then(|ms| Local.timestamp_millis_opt(ms).single())
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "--".to_string());

            info(format!(
                "Signed in. Session expires at {} ({} left)",
                expires,
                remaining(session.remaining_ms(now_ms()))
            ));
        }
        None => warning("Not signed in."),
    }

    info(format!("Record source: {}", cfg.source.as_str()));
    Ok(())
}
