use crate::errors::AppResult;
use crate::models::CheckinRecord;
use crate::store::{RecordStore, sort_newest_first};

/// In-process store, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<CheckinRecord>,
}

impl MemoryStore {
    pub fn new(mut records: Vec<CheckinRecord>) -> Self {
        sort_newest_first(&mut records);
        Self { records }
    }
}

impl RecordStore for MemoryStore {
    fn label(&self) -> &str {
        "memory"
    }

    fn fetch_all(&self) -> AppResult<Vec<CheckinRecord>> {
        Ok(self.records.clone())
    }
}
