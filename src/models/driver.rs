use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{driving_status::DrivingStatus, risk_type::RiskType, status::Status};

/// One monitored driver.
///
/// `driving_started_at` must be `Some` exactly when `driving_status` is
/// [`DrivingStatus::Driving`]. The flat layout mirrors the store columns, so a
/// record loaded from elsewhere may break that rule; [`DriverRecord::session`]
/// is the checked view of the two fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRecord {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub risk_type: RiskType,
    pub risk_level: u8,
    pub location: String,
    pub vehicle_type: String,
    pub average_score: u8,
    pub last_event_at: DateTime<Utc>,
    pub driving_status: DrivingStatus,
    pub driving_started_at: Option<DateTime<Utc>>,
    pub today_minutes: u32,
    pub monthly_minutes: u32,
}

/// Checked view of the driving/resting fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrivingSession {
    Resting,
    Driving { started_at: DateTime<Utc> },
}

/// The two ways the flat fields can disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("driver is driving but has no driving start time")]
    DrivingWithoutStart,
    #[error("driver is resting but still carries a driving start time")]
    RestingWithStart,
}

impl DriverRecord {
    pub fn session(&self) -> Result<DrivingSession, InvariantViolation> {
        match (self.driving_status, self.driving_started_at) {
            (DrivingStatus::Resting, None) => Ok(DrivingSession::Resting),
            (DrivingStatus::Driving, Some(started_at)) => Ok(DrivingSession::Driving { started_at }),
            (DrivingStatus::Driving, None) => Err(InvariantViolation::DrivingWithoutStart),
            (DrivingStatus::Resting, Some(_)) => Err(InvariantViolation::RestingWithStart),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.session().is_ok()
    }

    /// Whole minutes since the last detection, never negative.
    pub fn minutes_since_event(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_event_at).num_minutes().max(0)
    }

    /// Case-insensitive substring match over name, id and location.
    pub fn matches_term(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.id.to_lowercase().contains(&needle)
            || self.location.to_lowercase().contains(&needle)
    }
}
