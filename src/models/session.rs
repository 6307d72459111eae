use serde::{Deserialize, Serialize};

/// Locally persisted admin session.
///
/// Times are milliseconds since the Unix epoch. The token is not checked by
/// any server: it only makes two sessions distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub expires: Option<i64>,
    #[serde(default)]
    pub token: String,
}

impl Session {
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.expires.map(|e| (e - now_ms).max(0)).unwrap_or(0)
    }
}
