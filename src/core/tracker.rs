//! Driving / resting state machine and minute accrual.
//!
//! Only [`toggle_driving_status`] (and [`transition`], which it wraps) commits
//! minutes to a record. [`live_minutes`] is a read-only projection that can be
//! called as often as a view likes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};

use crate::models::driver::{DriverRecord, DrivingSession, InvariantViolation};
use crate::models::driving_status::DrivingStatus;

/// Minutes shown to a viewer at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LiveMinutes {
    pub today: u32,
    pub monthly: u32,
    pub current_session: u32,
}

/// Whole elapsed minutes between `start` and `now`, floored.
///
/// A `now` earlier than `start` yields 0 so counters never go backwards.
pub fn elapsed_minutes(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let ms = (now - start).num_milliseconds();
    if ms <= 0 {
        return 0;
    }
    u32::try_from(ms / 60_000).unwrap_or(u32::MAX)
}

/// Apply one toggle, or report why the record cannot be toggled.
pub fn transition(
    record: &DriverRecord,
    now: DateTime<Utc>,
) -> Result<DriverRecord, InvariantViolation> {
    let mut next = record.clone();

    match record.session()? {
        DrivingSession::Resting => {
            next.driving_status = DrivingStatus::Driving;
            next.driving_started_at = Some(now);
        }
        DrivingSession::Driving { started_at } => {
            let elapsed = elapsed_minutes(started_at, now);
            next.today_minutes = record.today_minutes.saturating_add(elapsed);
            next.monthly_minutes = record.monthly_minutes.saturating_add(elapsed);
            next.driving_status = DrivingStatus::Resting;
            next.driving_started_at = None;
        }
    }

    debug!(
        driver = %record.id,
        from = record.driving_status.to_db_str(),
        to = next.driving_status.to_db_str(),
        "driving status toggled"
    );
    Ok(next)
}

/// Flip a record between driving and resting.
///
/// A record whose status and start time disagree is returned unchanged.
pub fn toggle_driving_status(record: &DriverRecord, now: DateTime<Utc>) -> DriverRecord {
    match transition(record, now) {
        Ok(next) => next,
        Err(violation) => {
            warn!(driver = %record.id, %violation, "toggle ignored");
            record.clone()
        }
    }
}

/// Current totals including the running session, without touching the record.
pub fn live_minutes(record: &DriverRecord, now: DateTime<Utc>) -> LiveMinutes {
    let current_session = match record.session() {
        Ok(DrivingSession::Driving { started_at }) => elapsed_minutes(started_at, now),
        Ok(DrivingSession::Resting) => 0,
        Err(violation) => {
            debug!(driver = %record.id, %violation, "live readout without session");
            0
        }
    };

    LiveMinutes {
        today: record.today_minutes.saturating_add(current_session),
        monthly: record.monthly_minutes.saturating_add(current_session),
        current_session,
    }
}
