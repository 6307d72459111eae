//! Session Guard: a local, expiring "signed in" flag.
//!
//! The session lives in a single named entry (a JSON file in the config
//! directory for the CLI). It is advisory only: nothing on the server side
//! checks the token.

use crate::errors::{AppError, AppResult};
use crate::models::Session;
use crate::utils::date::now_ms;
use chrono::Duration;
use rand::RngCore;
use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Storage for the one serialized session entry.
pub trait SessionStore {
    fn load(&self) -> AppResult<Option<String>>;
    fn save(&self, data: &str) -> AppResult<()>;
    fn remove(&self) -> AppResult<()>;
}

/// Session kept in a file (default: `~/.rcheckin/construction_admin_session.json`).
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, data: &str) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, data)?;
        Ok(())
    }

    fn remove(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Session kept in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RefCell<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_raw(raw: &str) -> Self {
        Self {
            slot: RefCell::new(Some(raw.to_string())),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> AppResult<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, data: &str) -> AppResult<()> {
        *self.slot.borrow_mut() = Some(data.to_string());
        Ok(())
    }

    fn remove(&self) -> AppResult<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Outcome of reading the stored entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Missing,
    /// Present but not a usable session (not authenticated, no or zero expiry).
    Inactive,
    /// Was present, had expired or was unreadable, and has been deleted.
    Cleared,
    Active(Session),
}

pub struct SessionGuard<S: SessionStore> {
    store: S,
    timeout: Duration,
}

impl<S: SessionStore> SessionGuard<S> {
    pub fn new(store: S, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(now_ms())
    }

    pub fn is_authenticated_at(&self, now: i64) -> bool {
        matches!(self.state_at(now), SessionState::Active(_))
    }

    /// The live session, if any.
    pub fn current(&self) -> Option<Session> {
        match self.state_at(now_ms()) {
            SessionState::Active(s) => Some(s),
            _ => None,
        }
    }

    /// Read and classify the stored entry at time `now` (ms since epoch).
    ///
    /// Never fails: an unreadable or unparsable entry counts as "not signed
    /// in". Expired and unparsable entries are deleted on the way out.
    pub fn state_at(&self, now: i64) -> SessionState {
        let raw = match self.store.load() {
            Ok(Some(raw)) => raw,
            Ok(None) => return SessionState::Missing,
            Err(_) => return self.clear(),
        };

        let session: Session = match serde_json::from_str(&raw) {
            Ok(s) => s,
            Err(_) => return self.clear(),
        };

        // expires: 0 is what a cleared entry looks like, not an expired one
        let Some(expires) = session.expires.filter(|e| *e != 0 && session.authenticated) else {
            return SessionState::Inactive;
        };

        if now > expires {
            return self.clear();
        }

        SessionState::Active(session)
    }

    fn clear(&self) -> SessionState {
        // Best effort: the caller only needs to know it is not signed in.
        let _ = self.store.remove();
        SessionState::Cleared
    }

    pub fn create_session(&self) -> AppResult<Session> {
        self.create_session_at(now_ms())
    }

    /// Write a fresh session valid from `now` for the configured timeout.
    pub fn create_session_at(&self, now: i64) -> AppResult<Session> {
        let expires = now
            .checked_add(self.timeout.num_milliseconds())
            .ok_or_else(|| AppError::Config("session expiry is out of range".to_string()))?;

        let session = Session {
            authenticated: true,
            timestamp: now,
            expires: Some(expires),
            token: generate_token(),
        };

        self.store.save(&serde_json::to_string(&session)?)?;
        Ok(session)
    }

    pub fn logout(&self) -> AppResult<()> {
        self.store.remove()
    }
}

/// 32 random bytes, hex encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
