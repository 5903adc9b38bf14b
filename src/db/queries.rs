use crate::errors::AppError;
use crate::models::driver::DriverRecord;
use crate::models::driving_status::DrivingStatus;
use crate::models::risk_type::RiskType;
use crate::models::status::Status;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DRIVER_COLUMNS: &str = "id, name, status, risk_type, risk_level, location, vehicle_type,
     average_score, last_event_at, driving_status, driving_started_at,
     today_minutes, monthly_minutes";

pub fn insert_driver(conn: &Connection, d: &DriverRecord) -> Result<()> {
    conn.execute(
        &format!(
            "INSERT INTO drivers ({DRIVER_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
        ),
        params![
            d.id,
            d.name,
            d.status.to_db_str(),
            d.risk_type.to_db_str(),
            d.risk_level,
            d.location,
            d.vehicle_type,
            d.average_score,
            d.last_event_at.to_rfc3339(),
            d.driving_status.to_db_str(),
            d.driving_started_at.map(|t| t.to_rfc3339()),
            d.today_minutes,
            d.monthly_minutes,
        ],
    )?;
    Ok(())
}

/// Overwrite every column of the row with the same id. Returns rows touched.
pub fn update_driver(conn: &Connection, d: &DriverRecord) -> Result<usize> {
    conn.execute(
        "UPDATE drivers
         SET name = ?2, status = ?3, risk_type = ?4, risk_level = ?5, location = ?6,
             vehicle_type = ?7, average_score = ?8, last_event_at = ?9,
             driving_status = ?10, driving_started_at = ?11,
             today_minutes = ?12, monthly_minutes = ?13
         WHERE id = ?1",
        params![
            d.id,
            d.name,
            d.status.to_db_str(),
            d.risk_type.to_db_str(),
            d.risk_level,
            d.location,
            d.vehicle_type,
            d.average_score,
            d.last_event_at.to_rfc3339(),
            d.driving_status.to_db_str(),
            d.driving_started_at.map(|t| t.to_rfc3339()),
            d.today_minutes,
            d.monthly_minutes,
        ],
    )
}

pub fn load_drivers(conn: &Connection) -> Result<Vec<DriverRecord>> {
    let mut stmt = conn.prepare(&format!("SELECT {DRIVER_COLUMNS} FROM drivers ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_driver(conn: &Connection, id: &str) -> Result<Option<DriverRecord>> {
    let mut stmt = conn.prepare(&format!("SELECT {DRIVER_COLUMNS} FROM drivers WHERE id = ?1"))?;
    stmt.query_row([id], map_row).optional()
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

/// Parse an RFC 3339 column into UTC.
pub fn parse_ts(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(idx, AppError::InvalidTimestamp(raw.to_string())))
}

pub fn parse_opt_ts(idx: usize, raw: Option<String>) -> Result<Option<DateTime<Utc>>> {
    raw.map(|s| parse_ts(idx, &s)).transpose()
}

pub fn map_row(row: &Row) -> Result<DriverRecord> {
    let status_str: String = row.get("status")?;
    let status = Status::from_db_str(&status_str)
        .ok_or_else(|| conversion_error(2, AppError::InvalidStatus(status_str.clone())))?;

    let risk_str: String = row.get("risk_type")?;
    let risk_type = RiskType::from_db_str(&risk_str)
        .ok_or_else(|| conversion_error(3, AppError::InvalidRiskType(risk_str.clone())))?;

    let ds_str: String = row.get("driving_status")?;
    let driving_status = DrivingStatus::from_db_str(&ds_str).ok_or_else(|| {
        conversion_error(9, AppError::Other(format!("Invalid driving status: {ds_str}")))
    })?;

    let last_event: String = row.get("last_event_at")?;
    let started: Option<String> = row.get("driving_started_at")?;

    Ok(DriverRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        status,
        risk_type,
        risk_level: row.get("risk_level")?,
        location: row.get("location")?,
        vehicle_type: row.get("vehicle_type")?,
        average_score: row.get("average_score")?,
        last_event_at: parse_ts(8, &last_event)?,
        driving_status,
        driving_started_at: parse_opt_ts(10, started)?,
        today_minutes: row.get("today_minutes")?,
        monthly_minutes: row.get("monthly_minutes")?,
    })
}
