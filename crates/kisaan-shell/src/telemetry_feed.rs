//! Background telemetry feed.
//!
//! Runs the simulator on a fixed interval in a spawned task and
//! publishes each snapshot through a watch channel. The task is scoped
//! to the feed handle: cancelling (or dropping) the handle stops the
//! ticker, so a torn-down shell can never receive another update.

use std::time::Duration;

use kisaan_core::telemetry::{TelemetrySimulator, TelemetrySnapshot};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Handle to the running telemetry task.
pub struct TelemetryFeed {
    rx: watch::Receiver<TelemetrySnapshot>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl TelemetryFeed {
    /// Spawns the ticking task. The channel starts with the simulator's
    /// current snapshot, so subscribers always see a value.
    pub fn spawn(mut simulator: TelemetrySimulator, tick: Duration) -> Self {
        let (tx, rx) = watch::channel(*simulator.snapshot());
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval(tick);
            // The first tick of a tokio interval completes immediately.
            ticker.tick().await;
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        let snapshot = simulator.step();
                        if tx.send(snapshot).is_err() {
                            // Every receiver is gone; nothing left to feed.
                            break;
                        }
                    }
                }
            }
            tracing::debug!("[TelemetryFeed] Ticker stopped");
        });

        Self {
            rx,
            cancel,
            task: Some(task),
        }
    }

    /// The most recently published snapshot.
    pub fn latest(&self) -> TelemetrySnapshot {
        *self.rx.borrow()
    }

    /// A receiver that observes every subsequent snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TelemetrySnapshot> {
        self.rx.clone()
    }

    /// Cancels the ticking task and waits for it to finish.
    pub async fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TelemetryFeed {
    fn drop(&mut self) {
        // Last-resort cancellation for handles dropped without shutdown.
        self.cancel.cancel();
    }
}
