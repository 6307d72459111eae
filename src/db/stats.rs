use crate::db::pool::DbPool;
use crate::models::checkin::parse_created_at;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL CHECK-INS / EMPLOYEES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM employee_checkins", [], |row| row.get(0))?;
    let employees: i64 = pool.conn.query_row(
        "SELECT COUNT(DISTINCT employee_name) FROM employee_checkins",
        [],
        |row| row.get(0),
    )?;
    println!(
        "{}• Cached check-ins:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!(
        "{}• Employees:{} {}{}{}",
        CYAN, RESET, GREEN, employees, RESET
    );

    //
    // 3) TIME RANGE (created_at)
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM employee_checkins ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM employee_checkins ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Check-in range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE CHECK-INS/DAY
    //
    if let (Some(f), Some(l)) = (
        first.as_deref().and_then(parse_created_at),
        last.as_deref().and_then(parse_created_at),
    ) {
        let days = (l - f).num_days().max(1);
        let avg = count as f64 / days as f64;
        println!("{}• Average check-ins/day:{} {:.2}", CYAN, RESET, avg);
    }

    //
    // 5) LAST SYNC
    //
    let last_sync: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM log WHERE operation = 'sync' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "{}• Last sync:{} {}",
        CYAN,
        RESET,
        last_sync.unwrap_or_else(|| format!("{GREY}never{RESET}"))
    );

    println!();
    Ok(())
}
