//! Periodic metrics polling worker
//!
//! Drives the dashboard's fetch cycles: one immediately on startup, then one
//! per refresh interval until shutdown. Each cycle fetches both metric series
//! concurrently and applies them only as a pair.

use crate::api::MetricsApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::{FETCH_ERROR_MESSAGE, refresh};
use crate::error_classifier::{ErrorClassifier, LogLevel};
use crate::events::{Event, EventType};
use crate::metrics::MetricsSnapshot;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Fetch worker polling both metrics endpoints on a fixed cadence.
pub struct MetricsPoller {
    api: Box<dyn MetricsApi>,
    event_sender: mpsc::Sender<Event>,
    classifier: ErrorClassifier,
}

impl MetricsPoller {
    pub fn new(api: Box<dyn MetricsApi>, event_sender: mpsc::Sender<Event>) -> Self {
        Self {
            api,
            event_sender,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Start the worker. Shutdown is observed between cycles, so no new cycle
    /// starts after it fires; a cycle already in flight runs to completion and
    /// its events are dropped once the receiver is gone.
    pub fn run(self, mut shutdown: broadcast::Receiver<()>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(refresh::interval());
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown.recv() => break,
                    _ = interval.tick() => {
                        self.fetch_cycle().await;
                        self.send_event(
                            format!("Next refresh in {}s", refresh::interval_secs()),
                            EventType::Waiting,
                            LogLevel::Debug,
                        )
                        .await;
                    }
                }
            }
        })
    }

    /// One fetch cycle. Either both series arrive and are forwarded as a
    /// single snapshot, or the cycle fails as a unit and no partial result
    /// leaves this function.
    async fn fetch_cycle(&self) {
        self.send_event(
            "Fetching campaign metrics...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        )
        .await;

        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                let msg = format!(
                    "Refreshed {} summary rows, {} realtime buckets",
                    snapshot.summary.len(),
                    snapshot.realtime.len()
                );
                let _ = self
                    .event_sender
                    .send(Event::snapshot_applied(snapshot, msg))
                    .await;
            }
            Err(e) => {
                let log_level = self.classifier.classify_fetch_error(&e);
                self.send_event(
                    format!("{}: {}", FETCH_ERROR_MESSAGE, e),
                    EventType::Error,
                    log_level,
                )
                .await;
            }
        }
    }

    async fn fetch_snapshot(&self) -> Result<MetricsSnapshot, ApiError> {
        let (summary, realtime) =
            tokio::try_join!(self.api.fetch_summary(), self.api.fetch_realtime())?;
        Ok(MetricsSnapshot { summary, realtime })
    }

    async fn send_event(&self, msg: String, event_type: EventType, log_level: LogLevel) {
        let _ = self
            .event_sender
            .send(Event::poller_with_level(msg, event_type, log_level))
            .await;
    }
}
