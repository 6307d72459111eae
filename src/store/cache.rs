use crate::db::initialize::open_ready;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_checkins;
use crate::errors::{AppError, AppResult};
use crate::models::CheckinRecord;
use crate::store::RecordStore;

/// Local SQLite mirror, filled by `sync` or `import`.
pub struct CacheStore {
    pool: DbPool,
}

impl CacheStore {
    pub fn open(db_path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: open_ready(db_path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl RecordStore for CacheStore {
    fn label(&self) -> &str {
        "cache"
    }

    fn fetch_all(&self) -> AppResult<Vec<CheckinRecord>> {
        load_all_checkins(&self.pool.conn).map_err(|e| AppError::Fetch(e.to_string()))
    }
}
