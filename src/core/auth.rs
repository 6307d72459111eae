//! Admin credential check and login flow.
//!
//! Credentials are never compiled in: they come from the configuration file
//! or environment (`LocalVerifier`), or are checked by the hosted auth
//! service (`RemoteVerifier`).

use crate::config::{AuthConfig, AuthProvider, Config};
use crate::core::session::{SessionGuard, SessionStore};
use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::store::rest::service_message;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use std::thread;
use std::time::Duration;

/// Compare two strings without stopping at the first differing byte.
///
/// Lengths are compared first (and leak). This only evens out the timing of
/// the comparison itself; it does not protect a credential that is readable
/// on the same machine.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    diff == 0
}

pub trait CredentialVerifier {
    /// `Ok(false)` for wrong credentials; `Err` when the check itself failed.
    fn verify(&self, username: &str, password: &SecretString) -> AppResult<bool>;
}

/// Single admin account from configuration.
pub struct LocalVerifier {
    username: String,
    password: SecretString,
}

impl LocalVerifier {
    pub fn new(username: &str, password: SecretString) -> Self {
        Self {
            username: username.to_string(),
            password,
        }
    }

    pub fn from_config(cfg: &AuthConfig) -> AppResult<Self> {
        if cfg.username.trim().is_empty() || cfg.password.is_empty() {
            return Err(AppError::Config(
                "no admin credentials configured: set auth.username/auth.password \
                 (or RCHECKIN_ADMIN_USERNAME / RCHECKIN_ADMIN_PASSWORD)"
                    .to_string(),
            ));
        }
        Ok(Self::new(cfg.username.trim(), cfg.password()))
    }
}

impl CredentialVerifier for LocalVerifier {
    fn verify(&self, username: &str, password: &SecretString) -> AppResult<bool> {
        // Both comparisons always run.
        let user_ok = constant_time_eq(username, &self.username);
        let pass_ok = constant_time_eq(password.expose_secret(), self.password.expose_secret());
        Ok(user_ok & pass_ok)
    }
}

/// Password grant against the hosted auth service (`/auth/v1/token`).
pub struct RemoteVerifier {
    client: Client,
    base_url: String,
    anon_key: SecretString,
}

impl RemoteVerifier {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        if !cfg.store.is_configured() {
            return Err(AppError::StoreNotConfigured(
                "remote login needs store.url and store.anon_key".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.store.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.store.base_url().to_string(),
            anon_key: cfg.store.anon_key(),
        })
    }
}

impl CredentialVerifier for RemoteVerifier {
    fn verify(&self, username: &str, password: &SecretString) -> AppResult<bool> {
        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let body = serde_json::json!({
            "email": username,
            "password": password.expose_secret(),
        });

        let resp = self
            .client
            .post(url)
            .header("apikey", self.anon_key.expose_secret())
            .json(&body)
            .send()
            .map_err(|e| AppError::AuthService(e.to_string()))?;

        match resp.status() {
            s if s.is_success() => Ok(true),
            s if s == StatusCode::BAD_REQUEST || s == StatusCode::UNAUTHORIZED => Ok(false),
            s => {
                let text = resp.text().unwrap_or_default();
                Err(AppError::AuthService(format!(
                    "{} ({})",
                    service_message(&text),
                    s
                )))
            }
        }
    }
}

pub fn verifier_from_config(cfg: &Config) -> AppResult<Box<dyn CredentialVerifier>> {
    match cfg.auth.provider {
        AuthProvider::Local => Ok(Box::new(LocalVerifier::from_config(&cfg.auth)?)),
        AuthProvider::Remote => Ok(Box::new(RemoteVerifier::from_config(cfg)?)),
    }
}

/// Check the credentials and open a session.
///
/// Waits `delay` before checking, whatever the outcome. The username is
/// trimmed, the password is taken as typed.
pub fn login<S, V>(
    verifier: &V,
    guard: &SessionGuard<S>,
    username: &str,
    password: &SecretString,
    delay: Duration,
) -> AppResult<Session>
where
    S: SessionStore,
    V: CredentialVerifier + ?Sized,
{
    if !delay.is_zero() {
        thread::sleep(delay);
    }

    if !verifier.verify(username.trim(), password)? {
        return Err(AppError::InvalidCredentials);
    }

    guard.create_session()
}
