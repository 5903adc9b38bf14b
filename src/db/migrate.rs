use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

const TABLES: [&str; 4] = ["drivers", "alerts", "notifications", "log"];

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

/// Create the `drivers` table.
fn create_drivers_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS drivers (
            id                 TEXT PRIMARY KEY,
            name               TEXT NOT NULL,
            status             TEXT NOT NULL CHECK(status IN ('normal','caution','danger','critical')),
            risk_type          TEXT NOT NULL CHECK(risk_type IN ('none','intoxication','drowsiness','speeding','reckless')),
            risk_level         INTEGER NOT NULL CHECK(risk_level BETWEEN 0 AND 100),
            location           TEXT NOT NULL DEFAULT '',
            vehicle_type       TEXT NOT NULL DEFAULT '',
            average_score      INTEGER NOT NULL DEFAULT 0,
            last_event_at      TEXT NOT NULL,
            driving_status     TEXT NOT NULL CHECK(driving_status IN ('driving','resting')),
            driving_started_at TEXT,
            today_minutes      INTEGER NOT NULL DEFAULT 0 CHECK(today_minutes >= 0),
            monthly_minutes    INTEGER NOT NULL DEFAULT 0 CHECK(monthly_minutes >= 0)
        );

        CREATE INDEX IF NOT EXISTS idx_drivers_risk ON drivers(risk_level);
        "#,
    )?;
    Ok(())
}

/// Create the `alerts` table (alert history).
fn create_alerts_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS alerts (
            seq         INTEGER PRIMARY KEY AUTOINCREMENT,
            id          TEXT NOT NULL UNIQUE,
            driver_id   TEXT NOT NULL REFERENCES drivers(id),
            sent_at     TEXT NOT NULL,
            status      TEXT NOT NULL CHECK(status IN ('sent','acknowledged','resolved')),
            message     TEXT NOT NULL,
            resolved_at TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Create the `notifications` table.
fn create_notifications_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id          TEXT PRIMARY KEY,
            kind        TEXT NOT NULL CHECK(kind IN ('critical','warning','info')),
            driver_id   TEXT NOT NULL REFERENCES drivers(id),
            driver_name TEXT NOT NULL,
            message     TEXT NOT NULL,
            location    TEXT NOT NULL DEFAULT '',
            at          TEXT NOT NULL,
            read        INTEGER NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create every table the store needs, then verify them.
pub fn create_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;

    ensure_log_table(conn)?;
    create_drivers_table(conn)?;
    create_alerts_table(conn)?;
    create_notifications_table(conn)?;

    for table in TABLES {
        if !table_exists(conn, table)? {
            return Err(AppError::Schema(format!("table '{table}' was not created")));
        }
    }

    Ok(())
}
