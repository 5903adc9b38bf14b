use std::time::Duration;

use tracing::info;

use crate::core::clock::Clock;
use crate::core::refresh::RefreshTicker;
use crate::core::store::DriverStore;
use crate::core::tracker::{self, LiveMinutes};
use crate::errors::{AppError, AppResult};
use crate::models::driver::DriverRecord;

pub struct WatchLogic;

impl WatchLogic {
    /// Re-read the live readout of `id` every `period` until `max_ticks`
    /// refreshes have been shown or Ctrl-C is pressed.
    ///
    /// Returns the number of refreshes delivered to `on_refresh`. The timer is
    /// torn down before this returns.
    pub fn run<C, F>(
        store: &DriverStore,
        clock: &C,
        id: &str,
        period: Duration,
        max_ticks: Option<u32>,
        mut on_refresh: F,
    ) -> AppResult<u32>
    where
        C: Clock,
        F: FnMut(&DriverRecord, LiveMinutes),
    {
        if period.is_zero() {
            return Err(AppError::Refresh("refresh interval must be positive".into()));
        }
        store.require(id)?;
        if max_ticks == Some(0) {
            return Ok(0);
        }

        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        rt.block_on(async {
            let mut ticker = RefreshTicker::start(period);
            let ctrl_c = tokio::signal::ctrl_c();
            tokio::pin!(ctrl_c);

            let mut shown = 0u32;
            loop {
                tokio::select! {
                    tick = ticker.tick() => {
                        if tick.is_none() {
                            break;
                        }
                        let record = store.require(id)?;
                        on_refresh(&record, tracker::live_minutes(&record, clock.now()));
                        shown += 1;
                        if max_ticks.is_some_and(|max| shown >= max) {
                            break;
                        }
                    }
                    _ = &mut ctrl_c => {
                        info!(driver = %id, "watch interrupted");
                        break;
                    }
                }
            }

            ticker.shutdown().await;
            Ok::<u32, AppError>(shown)
        })
    }
}
