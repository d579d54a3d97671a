//! Dashboard state management
//!
//! Contains the main dashboard state struct and related enums

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::metrics::{RealtimeRecord, SummaryRecord};

use std::collections::VecDeque;
use std::time::Instant;

/// State for tracking an in-flight fetch cycle
#[derive(Debug, Clone)]
pub enum FetchingState {
    Idle,
    Active { started_at: Instant },
}

/// The three observable content states of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// The first fetch cycle has not completed yet.
    Loading,
    /// Both series are on screen, replaced by every successful cycle.
    Ready,
    /// The most recent fetch cycle failed.
    Error(String),
}

/// Refresh countdown information for the header gauge.
#[derive(Debug, Clone)]
pub struct RefreshInfo {
    /// Length of the current countdown in seconds.
    pub interval_secs: u64,
    /// Seconds elapsed since the countdown started.
    pub elapsed_secs: u64,
    /// Whether the next cycle is due.
    pub due_now: bool,
}

impl Default for RefreshInfo {
    fn default() -> Self {
        Self {
            interval_secs: 0,
            elapsed_secs: 0,
            due_now: true,
        }
    }
}

/// Dashboard view state. Mutated only by the render loop applying worker
/// events; the fetch worker communicates exclusively through those events.
#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the dashboard is running.
    pub environment: Environment,
    /// Per-campaign daily aggregates, in received order.
    pub summary: Vec<SummaryRecord>,
    /// Per-minute aggregates, in received order.
    pub realtime: Vec<RealtimeRecord>,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Refresh countdown shown in the header.
    pub refresh_info: RefreshInfo,
    /// Animation tick counter
    pub tick: usize,

    /// Current content state (loading, ready, error).
    view_state: ViewState,
    /// Current fetching state (active, idle)
    fetching_state: FetchingState,
    /// Timestamp of the last successful refresh.
    last_refresh_timestamp: Option<String>,
    /// Start time and length of the current refresh countdown.
    pub(super) waiting_start_info: Option<(Instant, u64)>, // (start_time, original_wait_secs)
}

impl DashboardState {
    /// Initial state: loading, with both series empty.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            summary: Vec::new(),
            realtime: Vec::new(),
            pending_events: VecDeque::new(),
            refresh_info: RefreshInfo::default(),
            tick: 0,
            view_state: ViewState::Loading,
            fetching_state: FetchingState::Idle,
            last_refresh_timestamp: None,
            waiting_start_info: None,
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn fetching_state(&self) -> &FetchingState {
        &self.fetching_state
    }

    pub fn last_refresh_timestamp(&self) -> &Option<String> {
        &self.last_refresh_timestamp
    }

    // Setters used by the updaters when applying events.
    pub fn set_view_state(&mut self, state: ViewState) {
        self.view_state = state;
    }

    pub fn set_fetching_state(&mut self, state: FetchingState) {
        self.fetching_state = state;
    }

    pub fn set_last_refresh_timestamp(&mut self, timestamp: Option<String>) {
        self.last_refresh_timestamp = timestamp;
    }

    /// Queue a worker event for the next [`update`](Self::update) pass.
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
