use crate::errors::AppResult;
use crate::models::checkin::{CheckinRecord, parse_created_at};
use chrono::SecondsFormat;
use rusqlite::{Connection, Result, Row, params};

const SELECT_COLUMNS: &str = "SELECT id, employee_name, date, time, day_of_week,
        latitude, longitude, address, photo_url, created_at
 FROM employee_checkins";

/// Fixed-width UTC text, so ordering by the column is chronological.
fn created_at_text(r: &CheckinRecord) -> String {
    r.created_at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn map_row(row: &Row) -> Result<CheckinRecord> {
    let raw_created: String = row.get(9)?;
    let created_at = parse_created_at(&raw_created).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            9,
            rusqlite::types::Type::Text,
            format!("invalid created_at: {raw_created}").into(),
        )
    })?;

    Ok(CheckinRecord {
        id: row.get(0)?,
        employee_name: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        day_of_week: row.get(4)?,
        latitude: row.get(5)?,
        longitude: row.get(6)?,
        address: row.get(7)?,
        photo_url: row.get(8)?,
        created_at,
    })
}

/// All cached check-ins, newest first (same order as the hosted query).
pub fn load_all_checkins(conn: &Connection) -> AppResult<Vec<CheckinRecord>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY created_at DESC, id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn upsert(conn: &Connection, r: &CheckinRecord) -> Result<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO employee_checkins
            (id, employee_name, date, time, day_of_week, latitude, longitude,
             address, photo_url, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(id) DO UPDATE SET
            employee_name = excluded.employee_name,
            date          = excluded.date,
            time          = excluded.time,
            day_of_week   = excluded.day_of_week,
            latitude      = excluded.latitude,
            longitude     = excluded.longitude,
            address       = excluded.address,
            photo_url     = excluded.photo_url,
            created_at    = excluded.created_at",
    )?;

    stmt.execute(params![
        r.id,
        r.employee_name,
        r.date,
        r.time,
        r.day_of_week,
        r.latitude,
        r.longitude,
        r.address,
        r.photo_url,
        created_at_text(r),
    ])
}

/// Insert or update `records` by id, in a single transaction.
pub fn upsert_checkins(conn: &mut Connection, records: &[CheckinRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    for r in records {
        upsert(&tx, r)?;
    }
    tx.commit()?;
    Ok(records.len())
}

/// Replace the whole mirror with `records`, in a single transaction.
pub fn replace_all_checkins(conn: &mut Connection, records: &[CheckinRecord]) -> AppResult<usize> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM employee_checkins", [])?;
    for r in records {
        upsert(&tx, r)?;
    }
    tx.commit()?;
    Ok(records.len())
}

pub fn count_checkins(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM employee_checkins", [], |row| {
        row.get(0)
    })?)
}
