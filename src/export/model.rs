use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::driver::DriverRecord;

/// Flat row used for both CSV and JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DriverExport {
    pub id: String,
    pub name: String,
    pub status: String,
    pub risk_type: String,
    pub location: String,
    pub last_event: String,
    pub risk_level: u8,
    pub vehicle_type: String,
    pub driving_status: String,
    pub today_minutes: u32,
    pub monthly_minutes: u32,
}

impl DriverExport {
    /// `now` only feeds the "N min ago" column; stored counters are exported as-is.
    pub fn from_record(d: &DriverRecord, now: DateTime<Utc>) -> Self {
        Self {
            id: d.id.clone(),
            name: d.name.clone(),
            status: d.status.to_db_str().to_string(),
            risk_type: d.risk_type.to_db_str().to_string(),
            location: d.location.clone(),
            last_event: format!("{} min ago", d.minutes_since_event(now)),
            risk_level: d.risk_level,
            vehicle_type: d.vehicle_type.clone(),
            driving_status: d.driving_status.to_db_str().to_string(),
            today_minutes: d.today_minutes,
            monthly_minutes: d.monthly_minutes,
        }
    }
}
