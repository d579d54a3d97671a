//! Runtime wiring for the background metrics poller

use crate::api::MetricsApi;
use crate::events::Event;
use crate::poller::MetricsPoller;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Start the background metrics poller.
///
/// Returns the receiver for poller events together with the join handles of
/// the spawned tasks, so callers can await a clean shutdown.
pub fn start_metrics_poller(
    api: Box<dyn MetricsApi>,
    shutdown: broadcast::Receiver<()>,
) -> (mpsc::Receiver<Event>, Vec<JoinHandle<()>>) {
    let (event_sender, event_receiver) =
        mpsc::channel::<Event>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);

    let poller = MetricsPoller::new(api, event_sender);
    let join_handles = vec![poller.run(shutdown)];

    (event_receiver, join_handles)
}
