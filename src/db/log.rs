use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(
    conn: &Connection,
    at: DateTime<Utc>,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![at.to_rfc3339(), operation, target, message])?;

    Ok(())
}
