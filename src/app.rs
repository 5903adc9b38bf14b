//! Process-wide context shared by every command handler.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::core::clock::{AppClock, Clock};
use crate::core::store::DriverStore;
use crate::errors::AppResult;

pub struct App {
    pub cfg: Config,
    pub clock: AppClock,
    pub store: DriverStore,
}

impl App {
    /// Seed a fresh store relative to the clock's current instant.
    pub fn new(cfg: Config, clock: AppClock) -> AppResult<Self> {
        let store = DriverStore::open(clock.now())?;
        Ok(Self { cfg, clock, store })
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
