//! Dashboard controller: owns the loaded record list and its filtered view.
//!
//! Both lists are replaced wholesale, never edited in place.

use crate::core::filter::FilterQuery;
use crate::core::stats::StatsSummary;
use crate::errors::{AppError, AppResult};
use crate::models::CheckinRecord;
use crate::store::RecordStore;

pub struct Dashboard<S: RecordStore> {
    store: S,
    all_records: Vec<CheckinRecord>,
    filtered_records: Vec<CheckinRecord>,
    query: FilterQuery,
}

impl<S: RecordStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            all_records: Vec::new(),
            filtered_records: Vec::new(),
            query: FilterQuery::default(),
        }
    }

    pub fn source(&self) -> &str {
        self.store.label()
    }

    /// Fetch every record from the store and reset the filtered view.
    ///
    /// On failure the previously loaded lists are left untouched.
    pub fn load(&mut self) -> AppResult<usize> {
        let records = self.store.fetch_all().map_err(|e| match e {
            AppError::Fetch(msg) => AppError::Fetch(msg),
            AppError::StoreNotConfigured(msg) => AppError::StoreNotConfigured(msg),
            other => AppError::Fetch(other.to_string()),
        })?;

        self.filtered_records = self.query.apply(&records);
        self.all_records = records;
        Ok(self.all_records.len())
    }

    pub fn apply_filter(&mut self, query: FilterQuery) -> &[CheckinRecord] {
        self.filtered_records = query.apply(&self.all_records);
        self.query = query;
        &self.filtered_records
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn all_records(&self) -> &[CheckinRecord] {
        &self.all_records
    }

    pub fn filtered_records(&self) -> &[CheckinRecord] {
        &self.filtered_records
    }

    /// Number of records currently shown.
    pub fn total(&self) -> usize {
        self.filtered_records.len()
    }

    /// Statistics over every loaded record, regardless of the filter.
    pub fn employee_stats(&self) -> StatsSummary {
        StatsSummary::from_records(&self.all_records)
    }

    /// Look a record up among the filtered ones.
    pub fn find(&self, id: &str) -> AppResult<&CheckinRecord> {
        self.filtered_records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::RecordNotFound(id.to_string()))
    }
}
