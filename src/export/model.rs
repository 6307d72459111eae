// src/export/model.rs

use crate::models::CheckinRecord;
use crate::utils::date::local_datetime;
use serde::Serialize;

/// Fixed export columns, in order.
pub const HEADERS: [&str; 9] = [
    "Employee Name",
    "Date",
    "Time",
    "Day of Week",
    "Latitude",
    "Longitude",
    "Address",
    "Photo URL",
    "Check-in Time",
];

/// Flat export row. Field names serialize to the column headers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CheckinExport {
    #[serde(rename = "Employee Name")]
    pub employee_name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Day of Week")]
    pub day_of_week: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Photo URL")]
    pub photo_url: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "Check-in Time")]
    pub checkin_time: String,
}

impl From<&CheckinRecord> for CheckinExport {
    fn from(r: &CheckinRecord) -> Self {
        Self {
            employee_name: r.employee_name.clone(),
            date: r.date.clone(),
            time: r.time.clone(),
            day_of_week: r.day_of_week.clone(),
            latitude: r.latitude,
            longitude: r.longitude,
            address: r.address.clone(),
            photo_url: r.photo_url.clone(),
            checkin_time: local_datetime(&r.created_at),
        }
    }
}

/// Typed spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    /// Text form is kept for column width and for non-date fallbacks.
    DateTime(String),
}

impl Cell {
    pub(crate) fn display(&self) -> String {
        match self {
            Cell::Text(s) | Cell::DateTime(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

/// Row cells in `HEADERS` order.
pub(crate) fn export_to_cells(e: &CheckinExport) -> Vec<Cell> {
    vec![
        Cell::Text(e.employee_name.clone()),
        Cell::Text(e.date.clone()),
        Cell::Text(e.time.clone()),
        Cell::Text(e.day_of_week.clone()),
        Cell::Number(e.latitude),
        Cell::Number(e.longitude),
        Cell::Text(e.address.clone()),
        Cell::Text(e.photo_url.clone()),
        Cell::DateTime(e.checkin_time.clone()),
    ]
}
