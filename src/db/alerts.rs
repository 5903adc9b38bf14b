use crate::db::queries::{parse_opt_ts, parse_ts};
use crate::errors::AppError;
use crate::models::alert::{Alert, AlertStatus};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn insert_alert(conn: &Connection, a: &Alert) -> Result<()> {
    conn.execute(
        "INSERT INTO alerts (id, driver_id, sent_at, status, message, resolved_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            a.id,
            a.driver_id,
            a.sent_at.to_rfc3339(),
            a.status.to_db_str(),
            a.message,
            a.resolved_at.map(|t| t.to_rfc3339()),
        ],
    )?;
    Ok(())
}

/// Alert history, newest first.
pub fn load_alerts(conn: &Connection) -> Result<Vec<Alert>> {
    let mut stmt = conn.prepare(
        "SELECT id, driver_id, sent_at, status, message, resolved_at
         FROM alerts
         ORDER BY seq DESC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_alert(conn: &Connection, id: &str) -> Result<Option<Alert>> {
    conn.query_row(
        "SELECT id, driver_id, sent_at, status, message, resolved_at
         FROM alerts WHERE id = ?1",
        [id],
        map_row,
    )
    .optional()
}

pub fn count_alerts(conn: &Connection) -> Result<usize> {
    let n: i64 = conn.query_row("SELECT COUNT(*) FROM alerts", [], |row| row.get(0))?;
    Ok(n.max(0) as usize)
}

pub fn has_open_alert(conn: &Connection, driver_id: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT 1 FROM alerts WHERE driver_id = ?1 AND status <> 'resolved' LIMIT 1")?;
    stmt.exists([driver_id])
}

pub fn set_alert_status(
    conn: &Connection,
    id: &str,
    status: AlertStatus,
    resolved_at: Option<DateTime<Utc>>,
) -> Result<usize> {
    conn.execute(
        "UPDATE alerts SET status = ?2, resolved_at = ?3 WHERE id = ?1",
        params![id, status.to_db_str(), resolved_at.map(|t| t.to_rfc3339())],
    )
}

fn map_row(row: &Row) -> Result<Alert> {
    let status_str: String = row.get("status")?;
    let status = AlertStatus::from_db_str(&status_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid alert status: {status_str}"))),
        )
    })?;

    let sent_at: String = row.get("sent_at")?;

    Ok(Alert {
        id: row.get("id")?,
        driver_id: row.get("driver_id")?,
        sent_at: parse_ts(2, &sent_at)?,
        status,
        message: row.get("message")?,
        resolved_at: parse_opt_ts(5, row.get("resolved_at")?)?,
    })
}
