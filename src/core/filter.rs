//! Filter Engine: name/date predicates over an in-memory record list.
//!
//! Both predicates are optional and ANDed. The result keeps the input order.

use crate::models::CheckinRecord;
use crate::utils::date::iso_to_record_date;

/// The two dashboard predicates, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    /// Case-insensitive substring of the employee name.
    pub name: Option<String>,
    /// Calendar date as `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// Date predicate after conversion to the stored `MM/DD/YYYY` form.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DateMatch {
    Any,
    Exact(String),
    /// The query was not a real calendar date: nothing matches.
    Invalid,
}

impl FilterQuery {
    pub fn new(name: Option<&str>, date: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    /// True when neither predicate restricts anything.
    pub fn is_empty(&self) -> bool {
        normalized_name(self.name.as_deref()).is_none() && non_blank(self.date.as_deref()).is_none()
    }

    /// True when a date was given but cannot be converted.
    pub fn has_invalid_date(&self) -> bool {
        date_match(self.date.as_deref()) == DateMatch::Invalid
    }

    pub fn apply(&self, records: &[CheckinRecord]) -> Vec<CheckinRecord> {
        filter_records(records, self.name.as_deref(), self.date.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn normalized_name(q: Option<&str>) -> Option<String> {
    non_blank(q).map(str::to_lowercase)
}

fn date_match(q: Option<&str>) -> DateMatch {
    match non_blank(q) {
        None => DateMatch::Any,
        Some(iso) => iso_to_record_date(iso)
            .map(DateMatch::Exact)
            .unwrap_or(DateMatch::Invalid),
    }
}

/// Stable filter of `records` by employee name and check-in date.
///
/// - `name_query`: trimmed, case-insensitive substring of `employee_name`.
/// - `date_query`: `YYYY-MM-DD`, compared against the stored `MM/DD/YYYY`.
///   An unparsable date matches no record.
///
/// Empty or absent queries match everything.
pub fn filter_records(
    records: &[CheckinRecord],
    name_query: Option<&str>,
    date_query: Option<&str>,
) -> Vec<CheckinRecord> {
    let name = normalized_name(name_query);
    let date = date_match(date_query);

    if date == DateMatch::Invalid {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| {
            let name_ok = name
                .as_deref()
                .is_none_or(|q| r.employee_name.to_lowercase().contains(q));
            let date_ok = match &date {
                DateMatch::Exact(d) => r.date == *d,
                _ => true,
            };
            name_ok && date_ok
        })
        .cloned()
        .collect()
}
