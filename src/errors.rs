//! Unified application error type.
//! All modules (store, core, export, cli) return AppError so that `main`
//! is the single place where failures are shown to the user.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local cache
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Record store is not configured: {0}")]
    StoreNotConfigured(String),

    #[error("Failed to load records: {0}")]
    Fetch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Invalid username or password. Please try again.")]
    InvalidCredentials,

    #[error("Not signed in or session expired: run `rcheckin login` first")]
    NotAuthenticated,

    #[error("Authentication service error: {0}")]
    AuthService(String),

    // ---------------------------
    // Lookup
    // ---------------------------
    #[error("Check-in record not found: {0}")]
    RecordNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Failed to export data: {0}. Please try again.")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
