//! Time utilities: parsing clock overrides and rendering timestamps.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a `--clock` value: RFC 3339, or `YYYY-MM-DD HH:MM` taken as UTC.
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map(|naive| naive.and_utc())
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Timestamp as shown in tables: `2026-01-12 14:32Z`.
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%MZ").to_string()
}
