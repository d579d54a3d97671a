//! Session setup and initialization

use crate::api::MetricsClient;
use crate::environment::Environment;
use crate::events::Event;
use crate::runtime::start_metrics_poller;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for poller events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Join handles for background tasks
    pub join_handles: Vec<JoinHandle<()>>,
    /// Shutdown sender to stop the poller
    pub shutdown_sender: broadcast::Sender<()>,
    /// Environment the session fetches from
    pub environment: Environment,
}

/// Sets up a metrics polling session
///
/// This function handles all the common setup required for both TUI and
/// headless modes:
/// 1. Creates the API client for the resolved environment
/// 2. Sets up the shutdown channel
/// 3. Starts the background poller
/// 4. Returns session data for mode-specific handling
pub fn setup_session(environment: Environment) -> SessionData {
    let client = MetricsClient::new(environment.clone());

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    let (event_receiver, join_handles) =
        start_metrics_poller(Box::new(client), shutdown_sender.subscribe());

    SessionData {
        event_receiver,
        join_handles,
        shutdown_sender,
        environment,
    }
}
