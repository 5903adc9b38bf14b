use crate::db::queries::parse_ts;
use crate::errors::AppError;
use crate::models::notification::{Notification, NotificationKind};
use rusqlite::{Connection, Result, Row, params};

pub fn insert_notification(conn: &Connection, n: &Notification) -> Result<()> {
    conn.execute(
        "INSERT INTO notifications (id, kind, driver_id, driver_name, message, location, at, read)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            n.id,
            n.kind.to_db_str(),
            n.driver_id,
            n.driver_name,
            n.message,
            n.location,
            n.at.to_rfc3339(),
            n.read,
        ],
    )?;
    Ok(())
}

/// Notifications, most recent first.
pub fn load_notifications(conn: &Connection) -> Result<Vec<Notification>> {
    let mut stmt = conn.prepare(
        "SELECT id, kind, driver_id, driver_name, message, location, at, read
         FROM notifications
         ORDER BY at DESC, id ASC",
    )?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn unread_count(conn: &Connection) -> Result<usize> {
    let n: i64 = conn.query_row(
        "SELECT COUNT(*) FROM notifications WHERE read = 0",
        [],
        |row| row.get(0),
    )?;
    Ok(n.max(0) as usize)
}

pub fn mark_read(conn: &Connection, id: &str) -> Result<usize> {
    conn.execute("UPDATE notifications SET read = 1 WHERE id = ?1", [id])
}

pub fn mark_all_read(conn: &Connection) -> Result<usize> {
    conn.execute("UPDATE notifications SET read = 1 WHERE read = 0", [])
}

fn map_row(row: &Row) -> Result<Notification> {
    let kind_str: String = row.get("kind")?;
    let kind = NotificationKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid notification kind: {kind_str}"))),
        )
    })?;
    let at: String = row.get("at")?;

    Ok(Notification {
        id: row.get("id")?,
        kind,
        driver_id: row.get("driver_id")?,
        driver_name: row.get("driver_name")?,
        message: row.get("message")?,
        location: row.get("location")?,
        at: parse_ts(6, &at)?,
        read: row.get("read")?,
    })
}
