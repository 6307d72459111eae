use chrono::{DateTime, Utc};
use serde::Serialize;

/// Per-employee summary, recomputed from the full record list on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeStat {
    pub name: String,
    pub count: usize,
    pub first_checkin: DateTime<Utc>,
    pub latest_checkin: DateTime<Utc>,
    /// Rounded to one decimal.
    pub avg_per_week: f64,
    /// Share of all records, rounded to an integer.
    pub percentage: u32,
}
