use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Where list/stats/export read their records from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Hosted PostgREST table
    #[default]
    Remote,
    /// Local SQLite mirror (filled by `sync` or `import`)
    Cache,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Remote => "remote",
            Source::Cache => "cache",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Username/password from this file or the environment
    #[default]
    Local,
    /// Password grant against the hosted auth service
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub provider: AuthProvider,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default)]
    pub source: Source,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default = "default_session_timeout_hours")]
    pub session_timeout_hours: i64,
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
}

fn default_table() -> String {
    "employee_checkins".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_session_timeout_hours() -> i64 {
    24
}
fn default_login_delay_ms() -> u64 {
    1000
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider: AuthProvider::Local,
            username: "admin".to_string(),
            password: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            source: Source::Remote,
            store: StoreConfig::default(),
            auth: AuthConfig::default(),
            session_timeout_hours: default_session_timeout_hours(),
            login_delay_ms: default_login_delay_ms(),
        }
    }
}

impl StoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty() && !self.anon_key.trim().is_empty()
    }

    pub fn base_url(&self) -> &str {
        self.url.trim().trim_end_matches('/')
    }

    pub fn anon_key(&self) -> SecretString {
        SecretString::from(self.anon_key.clone())
    }
}

impl AuthConfig {
    pub fn password(&self) -> SecretString {
        SecretString::from(self.password.clone())
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcheckin")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcheckin")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcheckin.conf")
    }

    /// Return the full path of the local SQLite cache
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcheckin.sqlite")
    }

    /// Return the full path of the persisted admin session
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("construction_admin_session.json")
    }

    /// Load configuration from file (or defaults if not found), then apply
    /// environment overrides.
    pub fn load() -> AppResult<Self> {
        let mut cfg = Self::load_file()?;
        cfg.apply_env();
        Ok(cfg)
    }

    /// Load configuration from file only (or defaults if not found).
    ///
    /// Use this whenever the result may be written back with `save`, so
    /// environment secrets never end up in the file.
    pub fn load_file() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        serde_yaml::from_str(&content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var("SUPABASE_URL") {
            self.store.url = url;
        }
        if let Ok(key) = env::var("SUPABASE_ANON_KEY") {
            self.store.anon_key = key;
        }
        if let Ok(user) = env::var("RCHECKIN_ADMIN_USERNAME") {
            self.auth.username = user;
        }
        if let Ok(pass) = env::var("RCHECKIN_ADMIN_PASSWORD") {
            self.auth.password = pass;
        }
    }

    /// Copy of the configuration with secrets masked, for printing.
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        if !out.store.anon_key.is_empty() {
            out.store.anon_key = "[REDACTED]".to_string();
        }
        if !out.auth.password.is_empty() {
            out.auth.password = "[REDACTED]".to_string();
        }
        out
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        fs::write(Self::config_file(), yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok(())
    }

    /// Initialize configuration directory and file.
    ///
    /// An existing config file is kept as is; only the database path is
    /// updated when a custom one is given. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut cfg = Self::load_file()?;

        if let Some(name) = custom_db {
            let p = crate::utils::path::expand_tilde(&name);
            let db_path = if p.is_absolute() { p } else { dir.join(p) };
            cfg.database = db_path.to_string_lossy().to_string();
        }

        if !is_test {
            cfg.save()?;
        }

        Ok(cfg.database)
    }
}
