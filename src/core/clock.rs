//! Time sources for the tracker.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.now.set(at);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.advance(Duration::minutes(minutes));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// Clock selected at startup: wall time, or a manual clock pinned by `--clock`.
#[derive(Debug, Clone)]
pub enum AppClock {
    System(SystemClock),
    Manual(ManualClock),
}

impl AppClock {
    pub fn from_option(start: Option<DateTime<Utc>>) -> Self {
        match start {
            Some(at) => AppClock::Manual(ManualClock::new(at)),
            None => AppClock::System(SystemClock),
        }
    }

    pub fn as_manual(&self) -> Option<&ManualClock> {
        match self {
            AppClock::Manual(m) => Some(m),
            AppClock::System(_) => None,
        }
    }
}

impl Clock for AppClock {
    fn now(&self) -> DateTime<Utc> {
        match self {
            AppClock::System(c) => c.now(),
            AppClock::Manual(c) => c.now(),
        }
    }
}
