//! Employee Aggregator: per-employee summary over the full record list.

use crate::models::{CheckinRecord, EmployeeStat};
use serde::Serialize;
use std::collections::HashMap;

const MS_PER_DAY: f64 = 86_400_000.0;

/// Totals shown above the per-employee cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total_employees: usize,
    pub total_checkins: usize,
    pub stats: Vec<EmployeeStat>,
}

impl StatsSummary {
    pub fn from_records(records: &[CheckinRecord]) -> Self {
        let stats = aggregate(records);
        Self {
            total_employees: stats.len(),
            total_checkins: records.len(),
            stats,
        }
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Group `records` by exact employee name and summarize each group.
///
/// - first/latest check-in come from `created_at`, never from `date`;
/// - `avg_per_week = count / max(1, max(1, days) / 7)`, one decimal;
/// - `percentage = round(count / records.len() * 100)`, so the shares of all
///   employees need not add up to exactly 100.
///
/// Output is sorted by count descending. The sort is stable: employees with
/// the same count stay in the order their first record appears in `records`.
pub fn aggregate(records: &[CheckinRecord]) -> Vec<EmployeeStat> {
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }

    // Groups in first-encounter order.
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&CheckinRecord>)> = Vec::new();
    for r in records {
        let name = r.employee_name.as_str();
        match index.get(name) {
            Some(&i) => groups[i].1.push(r),
            None => {
                index.insert(name, groups.len());
                groups.push((name, vec![r]));
            }
        }
    }

    let mut stats: Vec<EmployeeStat> = groups
        .into_iter()
        .filter_map(|(name, mut list)| {
            list.sort_by_key(|r| r.created_at);
            let first = list.first()?;
            let latest = list.last()?;
            let count = list.len();

            let span_ms = (latest.created_at - first.created_at).num_milliseconds() as f64;
            let days = (span_ms / MS_PER_DAY).max(1.0);
            let weeks = (days / 7.0).max(1.0);

            Some(EmployeeStat {
                name: name.to_string(),
                count,
                first_checkin: first.created_at,
                latest_checkin: latest.created_at,
                avg_per_week: round1(count as f64 / weeks),
                percentage: ((count as f64 / total as f64) * 100.0).round() as u32,
            })
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
