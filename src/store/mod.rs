//! Record Store adapters.
//!
//! The hosted table owns the data; everything here is read-only and returns
//! the full list ordered by `created_at` descending. Filtering never happens
//! in the store.

pub mod cache;
pub mod memory;
pub mod rest;

use crate::config::{Config, Source};
use crate::errors::AppResult;
use crate::models::CheckinRecord;

pub use cache::CacheStore;
pub use memory::MemoryStore;
pub use rest::RestStore;

pub trait RecordStore {
    /// Short label used in messages ("remote", "cache", ...).
    fn label(&self) -> &str;

    /// Every record, newest first.
    fn fetch_all(&self) -> AppResult<Vec<CheckinRecord>>;
}

impl<T: RecordStore + ?Sized> RecordStore for Box<T> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn fetch_all(&self) -> AppResult<Vec<CheckinRecord>> {
        (**self).fetch_all()
    }
}

/// Build the store selected by `source`, from configuration.
pub fn open_store(cfg: &Config, source: Source) -> AppResult<Box<dyn RecordStore>> {
    match source {
        Source::Remote => Ok(Box::new(RestStore::from_config(&cfg.store)?)),
        Source::Cache => Ok(Box::new(CacheStore::open(&cfg.database)?)),
    }
}

/// Newest first, ties by id so the order is stable across sources.
pub(crate) fn sort_newest_first(records: &mut [CheckinRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
}
