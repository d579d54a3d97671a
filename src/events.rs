//! Event System
//!
//! Events flowing from the fetch worker to the render loop (or to headless
//! stdout). A success event carries the full metrics snapshot; everything
//! else is informational.

use crate::error_classifier::LogLevel;
use crate::logging::{get_rust_log_level, should_log};
use crate::metrics::MetricsSnapshot;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    /// Fresh metric series, applied wholesale by the dashboard. Present only
    /// on success events.
    pub snapshot: Option<MetricsSnapshot>,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            snapshot: None,
        }
    }

    /// A completed fetch cycle with both series present.
    pub fn snapshot_applied(snapshot: MetricsSnapshot, msg: String) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type: EventType::Success,
            log_level: LogLevel::Info,
            snapshot: Some(snapshot),
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(msg, event_type, log_level)
    }

    /// Whether headless mode should print this event. Success events always
    /// print so every refresh stays visible; everything else is filtered by
    /// the `RUST_LOG` threshold.
    pub fn should_display(&self) -> bool {
        self.display_at(get_rust_log_level())
    }

    fn display_at(&self, threshold: LogLevel) -> bool {
        self.event_type == EventType::Success || should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
