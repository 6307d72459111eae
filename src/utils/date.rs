use chrono::{DateTime, Local, NaiveDate, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Convert a date-picker value (`YYYY-MM-DD`) to the `MM/DD/YYYY` form the
/// mobile client stores in `employee_checkins.date`.
///
/// Returns `None` for anything that is not a real calendar date: `2024-02-30`
/// is rejected rather than rolled over into March.
pub fn iso_to_record_date(iso: &str) -> Option<String> {
    parse_iso_date(iso).map(|d| d.format("%m/%d/%Y").to_string())
}

/// Local calendar date of a timestamp, as shown in the statistics view.
pub fn local_date(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%m/%d/%Y").to_string()
}

/// Local date and time of a timestamp, as shown in record details and exports.
pub fn local_datetime(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
