//! View models: plain display data derived from records and statistics.
//!
//! The CLI renders these as tables or JSON; nothing here decides which
//! records are shown.

use crate::core::stats::StatsSummary;
use crate::models::{CheckinRecord, EmployeeStat};
use crate::utils::date::{local_date, local_datetime};
use crate::utils::formatting::{coords, percent_bar};
use serde::Serialize;

const BAR_CELLS: usize = 20;

/// Record card / detail data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView {
    pub id: String,
    pub employee_name: String,
    /// "`date` • `time`"
    pub when: String,
    pub day_of_week: String,
    pub address: String,
    pub coordinates: String,
    pub photo_url: String,
    pub map_url: String,
    pub checked_in_at: String,
}

impl From<&CheckinRecord> for RecordView {
    fn from(r: &CheckinRecord) -> Self {
        Self {
            id: r.id.clone(),
            employee_name: r.employee_name.clone(),
            when: format!("{} • {}", r.date, r.time),
            day_of_week: r.day_of_week.clone(),
            address: r.address.clone(),
            coordinates: coords(r.latitude, r.longitude),
            photo_url: r.photo_url.clone(),
            map_url: map_url(r.latitude, r.longitude),
            checked_in_at: local_datetime(&r.created_at),
        }
    }
}

pub fn map_url(lat: f64, lng: f64) -> String {
    format!("https://maps.google.com/?q={},{}", lat, lng)
}

/// Per-employee card data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatView {
    pub name: String,
    pub count: usize,
    pub first_checkin: String,
    pub latest_checkin: String,
    pub avg_per_week: String,
    pub percentage: u32,
    pub share_label: String,
    #[serde(skip)]
    pub bar: String,
}

impl From<&EmployeeStat> for StatView {
    fn from(s: &EmployeeStat) -> Self {
        Self {
            name: s.name.clone(),
            count: s.count,
            first_checkin: local_date(&s.first_checkin),
            latest_checkin: local_date(&s.latest_checkin),
            avg_per_week: format!("{:.1}", s.avg_per_week),
            percentage: s.percentage,
            share_label: format!("{}% of total check-ins", s.percentage),
            bar: percent_bar(s.percentage, BAR_CELLS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total_employees: usize,
    pub total_checkins: usize,
    pub employees: Vec<StatView>,
}

impl From<&StatsSummary> for StatsView {
    fn from(s: &StatsSummary) -> Self {
        Self {
            total_employees: s.total_employees,
            total_checkins: s.total_checkins,
            employees: s.stats.iter().map(StatView::from).collect(),
        }
    }
}

pub fn record_views(records: &[CheckinRecord]) -> Vec<RecordView> {
    records.iter().map(RecordView::from).collect()
}
