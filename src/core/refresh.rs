//! Periodic refresh for live readouts.
//!
//! A [`RefreshTicker`] owns a timer task. The task only emits instants; the
//! view that owns the ticker decides what to recompute. Dropping the ticker
//! aborts the task, so a closed view cannot keep a timer alive.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

pub struct RefreshTicker {
    rx: mpsc::Receiver<Instant>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshTicker {
    /// Start ticking every `period`. The first tick fires immediately.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let at = interval.tick().await;
                if tx.send(at).await.is_err() {
                    break;
                }
            }
        });

        debug!(period_ms = period.as_millis() as u64, "refresh ticker started");
        Self {
            rx,
            handle: Some(handle),
        }
    }

    /// Wait for the next tick. `None` once the ticker has been stopped.
    pub async fn tick(&mut self) -> Option<Instant> {
        self.rx.recv().await
    }

    /// Handle to the timer task that stays valid after the ticker is gone.
    pub fn abort_handle(&self) -> Option<AbortHandle> {
        self.handle.as_ref().map(JoinHandle::abort_handle)
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the timer task and wait for it to go away.
    /// Returns `true` if the task was cancelled by this call.
    pub async fn shutdown(mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                matches!(handle.await, Err(e) if e.is_cancelled())
            }
            None => false,
        }
    }
}

impl Drop for RefreshTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("refresh ticker dropped");
        }
    }
}
