//! Keep the local SQLite mirror in step with the hosted table.

use crate::db::pool::DbPool;
use crate::db::queries::{replace_all_checkins, upsert_checkins};
use crate::errors::{AppError, AppResult};
use crate::models::CheckinRecord;
use crate::store::RecordStore;
use std::fs;
use std::path::Path;

/// Replace the mirror with everything `remote` returns.
///
/// Nothing is written when the fetch fails.
pub fn sync_cache<S: RecordStore + ?Sized>(remote: &S, pool: &mut DbPool) -> AppResult<usize> {
    let records = remote.fetch_all()?;
    replace_all_checkins(&mut pool.conn, &records)
}

/// Parse a JSON array of rows, in the same shape the hosted table returns.
pub fn read_records_file(path: &Path) -> AppResult<Vec<CheckinRecord>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Other(format!("cannot parse {}: {e}", path.display())))
}

/// Upsert the rows of a JSON file into the mirror. Returns the row count.
pub fn import_file(path: &Path, pool: &mut DbPool) -> AppResult<usize> {
    let records = read_records_file(path)?;
    upsert_checkins(&mut pool.conn, &records)
}
