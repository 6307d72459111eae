use crate::ui::messages::notice;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn checkins_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='employee_checkins'",
    )?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Mirror of the hosted `employee_checkins` table.
fn create_checkins_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employee_checkins (
            id            TEXT PRIMARY KEY,
            employee_name TEXT NOT NULL,
            date          TEXT NOT NULL,
            time          TEXT NOT NULL DEFAULT '',
            day_of_week   TEXT NOT NULL DEFAULT '',
            latitude      REAL NOT NULL,
            longitude     REAL NOT NULL,
            address       TEXT NOT NULL DEFAULT '',
            photo_url     TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Indexes for the two access paths: newest-first listing and name lookup.
fn migrate_add_checkin_indexes(conn: &Connection) -> Result<()> {
    let version = "20250812_0002_checkin_indexes";

    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_checkins_created_at ON employee_checkins(created_at);
        CREATE INDEX IF NOT EXISTS idx_checkins_employee ON employee_checkins(employee_name);
        "#,
    )?;

    mark_applied(conn, version, "Added created_at/employee_name indexes")?;
    notice(format!("Migration applied: {}", version));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Mirror table
    if !checkins_table_exists(conn)? {
        create_checkins_table(conn)?;
        mark_applied(
            conn,
            "20250810_0001_create_employee_checkins",
            "Created employee_checkins mirror table",
        )?;
    }

    // 3) Versioned upgrades
    migrate_add_checkin_indexes(conn)?;

    Ok(())
}
