//! The single owned store of driver records.
//!
//! Every view (list, search, detail, watch, export) reads from here, and the
//! only writers are [`DriverStore::toggle`] and [`DriverStore::replace`].

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::core::tracker::{self, LiveMinutes};
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::{queries, seed};
use crate::errors::{AppError, AppResult};
use crate::models::driver::DriverRecord;

pub struct DriverStore {
    pool: DbPool,
}

impl DriverStore {
    /// Create the in-memory schema and load the seed fleet relative to `now`.
    pub fn open(now: DateTime<Utc>) -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        seed::seed_all(&pool.conn, now)?;
        info!(drivers = seed::FLEET_SIZE, "store ready");
        Ok(Self { pool })
    }

    /// Create the schema without any records.
    pub fn empty() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &rusqlite::Connection {
        &self.pool.conn
    }

    pub fn all(&self) -> AppResult<Vec<DriverRecord>> {
        Ok(queries::load_drivers(&self.pool.conn)?)
    }

    pub fn get(&self, id: &str) -> AppResult<Option<DriverRecord>> {
        Ok(queries::load_driver(&self.pool.conn, id)?)
    }

    /// Like [`DriverStore::get`] but an unknown id is an error.
    pub fn require(&self, id: &str) -> AppResult<DriverRecord> {
        self.get(id)?
            .ok_or_else(|| AppError::UnknownDriver(id.to_string()))
    }

    pub fn insert(&mut self, record: &DriverRecord) -> AppResult<()> {
        queries::insert_driver(&self.pool.conn, record)?;
        Ok(())
    }

    /// Replace the record with the same id. Returns `false` if no such id exists.
    pub fn replace(&mut self, record: &DriverRecord, now: DateTime<Utc>) -> AppResult<bool> {
        let touched = queries::update_driver(&self.pool.conn, record)?;
        if touched == 0 {
            warn!(driver = %record.id, "replace ignored: unknown driver");
            return Ok(false);
        }
        ttlog(
            &self.pool.conn,
            now,
            "update",
            &record.id,
            &format!(
                "status={} risk={} level={}",
                record.status.to_db_str(),
                record.risk_type.to_db_str(),
                record.risk_level
            ),
        )?;
        Ok(true)
    }

    /// Toggle driving/resting for `id` at `now`.
    ///
    /// Unknown ids give `None`; a record in an inconsistent state comes back
    /// unchanged and nothing is written.
    pub fn toggle(&mut self, id: &str, now: DateTime<Utc>) -> AppResult<Option<DriverRecord>> {
        let Some(current) = self.get(id)? else {
            warn!(driver = %id, "toggle ignored: unknown driver");
            return Ok(None);
        };

        let next = match tracker::transition(&current, now) {
            Ok(next) => next,
            Err(violation) => {
                warn!(driver = %id, %violation, "toggle ignored");
                return Ok(Some(current));
            }
        };

        queries::update_driver(&self.pool.conn, &next)?;

        let accrued = next.today_minutes - current.today_minutes;
        let message = if next.driving_status.is_driving() {
            "started driving".to_string()
        } else {
            format!("stopped driving, accrued {accrued} min")
        };
        ttlog(&self.pool.conn, now, "toggle", id, &message)?;

        Ok(Some(next))
    }

    /// Live readout for `id`; `None` for an unknown id.
    pub fn live(&self, id: &str, now: DateTime<Utc>) -> AppResult<Option<LiveMinutes>> {
        Ok(self.get(id)?.map(|d| tracker::live_minutes(&d, now)))
    }
}
