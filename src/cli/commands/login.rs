use crate::cli::commands::session_guard;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::{login, verifier_from_config};
use crate::db::log::audit_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use secrecy::SecretString;
use std::io::{self, Write};
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Login { username, password } = cmd {
        let guard = session_guard(cfg)?;

        if let Some(session) = guard.current() {
            info(format!(
                "Already signed in (session valid for {})",
                remaining(session.remaining_ms(crate::utils::date::now_ms()))
            ));
            return Ok(());
        }

        let verifier = verifier_from_config(cfg)?;

        let username = username.clone().unwrap_or_else(|| cfg.auth.username.clone());
        let password = match password {
            Some(p) => SecretString::from(p.clone()),
            None => read_password()?,
        };

        println!("Signing in...");

        match login(
            verifier.as_ref(),
            &guard,
            &username,
            &password,
            Duration::from_millis(cfg.login_delay_ms),
        ) {
            Ok(_) => {
                audit_quiet(&cfg.database, "login", username.trim(), "Admin signed in");
                success(format!("Signed in as {}", username.trim()));
                Ok(())
            }
            Err(AppError::InvalidCredentials) => {
                audit_quiet(&cfg.database, "login_failed", username.trim(), "Invalid credentials");
                Err(AppError::InvalidCredentials)
            }
            Err(e) => Err(e),
        }
    } else {
        Ok(())
    }
}

fn read_password() -> AppResult<SecretString> {
    print!("Password: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(SecretString::from(
        line.trim_end_matches(['\r', '\n']).to_string(),
    ))
}

pub(crate) fn remaining(ms: i64) -> String {
    let mins = ms / 60_000;
    format!("{}h {:02}m", mins / 60, mins % 60)
}
