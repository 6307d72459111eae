use crate::config::StoreConfig;
use crate::errors::{AppError, AppResult};
use crate::models::CheckinRecord;
use crate::store::RecordStore;
use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

const NOT_CONFIGURED_HINT: &str =
    "set store.url and store.anon_key in rcheckin.conf (or SUPABASE_URL / SUPABASE_ANON_KEY)";

/// Hosted PostgREST table (`/rest/v1/<table>`).
pub struct RestStore {
    client: Client,
    base_url: String,
    anon_key: SecretString,
    table: String,
}

impl std::fmt::Debug for RestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStore")
            .field("base_url", &self.base_url)
            .field("anon_key", &"[REDACTED]")
            .field("table", &self.table)
            .finish_non_exhaustive()
    }
}

impl RestStore {
    pub fn from_config(cfg: &StoreConfig) -> AppResult<Self> {
        if !cfg.is_configured() {
            return Err(AppError::StoreNotConfigured(NOT_CONFIGURED_HINT.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url().to_string(),
            anon_key: cfg.anon_key(),
            table: cfg.table.clone(),
        })
    }

    /// Full list, newest first; filtering stays on the client.
    pub fn table_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=created_at.desc",
            self.base_url, self.table
        )
    }
}

impl RecordStore for RestStore {
    fn label(&self) -> &str {
        "remote"
    }

    fn fetch_all(&self) -> AppResult<Vec<CheckinRecord>> {
        let key = self.anon_key.expose_secret();

        let resp = self
            .client
            .get(self.table_url())
            .header("apikey", key)
            .bearer_auth(key)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| AppError::Fetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Fetch(format!(
                "{} ({})",
                service_message(&body),
                status
            )));
        }

        resp.json::<Vec<CheckinRecord>>()
            .map_err(|e| AppError::Fetch(format!("unexpected response: {e}")))
    }
}

/// Pull the human readable part out of a PostgREST / auth error body.
pub fn service_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|v| {
            ["message", "error_description", "msg", "error"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()))
        })
        .map(str::to_string)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                "empty response".to_string()
            } else {
                trimmed.to_string()
            }
        })
}
