//! Dashboard state update logic
//!
//! Contains all methods for applying worker events to the view state

use super::state::{DashboardState, FetchingState, RefreshInfo, ViewState};

use crate::consts::cli_consts::FETCH_ERROR_MESSAGE;
use crate::events::{Event as WorkerEvent, EventType};

use std::time::Instant;

impl DashboardState {
    /// Apply all queued events, then advance derived display state.
    pub fn update(&mut self) {
        self.tick += 1;

        // Process all queued events one by one
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
        }

        self.update_refresh_countdown();
    }

    /// Apply a single event to the view state
    fn process_event(&mut self, event: &WorkerEvent) {
        match event.event_type {
            EventType::Success => self.apply_snapshot(event),
            EventType::Error => self.apply_failure(),
            EventType::Refresh => self.begin_refresh(),
            EventType::Waiting => self.schedule_countdown(event),
        }
    }

    /// A successful cycle replaces both series wholesale. A success after an
    /// earlier failure clears the error, so the dashboard recovers visibly
    /// once the backend is healthy again.
    fn apply_snapshot(&mut self, event: &WorkerEvent) {
        let Some(snapshot) = &event.snapshot else {
            return;
        };
        self.summary = snapshot.summary.clone();
        self.realtime = snapshot.realtime.clone();
        self.set_view_state(ViewState::Ready);
        self.set_fetching_state(FetchingState::Idle);
        self.set_last_refresh_timestamp(Some(event.timestamp.clone()));
    }

    /// A failed cycle shows the fixed message; the series keep their prior
    /// contents and nothing partial is applied.
    fn apply_failure(&mut self) {
        self.set_view_state(ViewState::Error(FETCH_ERROR_MESSAGE.to_string()));
        self.set_fetching_state(FetchingState::Idle);
    }

    fn begin_refresh(&mut self) {
        if !matches!(self.fetching_state(), FetchingState::Active { .. }) {
            self.set_fetching_state(FetchingState::Active {
                started_at: Instant::now(),
            });
        }
    }

    fn schedule_countdown(&mut self, event: &WorkerEvent) {
        if let Some(seconds) = Self::extract_refresh_seconds(&event.msg) {
            self.waiting_start_info = Some((Instant::now(), seconds));
        }
    }

    /// Update the header countdown based on the current waiting state
    fn update_refresh_countdown(&mut self) {
        if let Some((start_time, original_secs)) = &self.waiting_start_info {
            let elapsed_secs = start_time.elapsed().as_secs();
            let remaining_secs = original_secs.saturating_sub(elapsed_secs);

            self.refresh_info = RefreshInfo {
                interval_secs: *original_secs,
                elapsed_secs,
                due_now: remaining_secs == 0,
            };

            // Clear expired countdown
            if remaining_secs == 0 {
                self.waiting_start_info = None;
            }
        } else {
            self.refresh_info = RefreshInfo::default();
        }
    }

    /// Extract the countdown from a waiting message. Expected format:
    /// "Next refresh in 60s"
    fn extract_refresh_seconds(msg: &str) -> Option<u64> {
        msg.strip_prefix("Next refresh in ")?
            .strip_suffix('s')?
            .parse()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_classifier::LogLevel;
    use crate::events::Event;
    use crate::metrics::{MetricsSnapshot, RealtimeRecord, SummaryRecord};

    fn summary_record(date: &str, campaign_id: &str) -> SummaryRecord {
        SummaryRecord {
            date: date.to_string(),
            campaign_id: campaign_id.to_string(),
            total_impressions: 1000,
            total_clicks: 50,
            total_conversions: 5,
            total_spend: 200.0,
            avg_ctr: 5.0,
            avg_cpc: 4.0,
        }
    }

    fn realtime_record(minute: &str) -> RealtimeRecord {
        RealtimeRecord {
            minute: minute.to_string(),
            impressions: 120,
            clicks: 6,
            conversions: 1,
            spend: 14.5,
            avg_ctr: 5.0,
        }
    }

    fn snapshot_event(snapshot: MetricsSnapshot) -> Event {
        Event::snapshot_applied(snapshot, "refreshed".to_string())
    }

    fn failure_event() -> Event {
        Event::poller_with_level(
            format!("{}: HTTP error with status 500", FETCH_ERROR_MESSAGE),
            EventType::Error,
            LogLevel::Warn,
        )
    }

    fn state() -> DashboardState {
        DashboardState::new(crate::environment::Environment::Local)
    }

    #[test]
    fn starts_loading_with_empty_series() {
        let state = state();
        assert_eq!(*state.view_state(), ViewState::Loading);
        assert!(state.summary.is_empty());
        assert!(state.realtime.is_empty());
    }

    #[test]
    fn first_success_moves_to_ready_and_applies_both_series() {
        let mut state = state();
        let snapshot = MetricsSnapshot {
            summary: vec![summary_record("2024-01-01", "C1"), summary_record("2024-01-02", "C2")],
            realtime: vec![realtime_record("10:00")],
        };
        state.add_event(snapshot_event(snapshot.clone()));
        state.update();

        assert_eq!(*state.view_state(), ViewState::Ready);
        assert_eq!(state.summary, snapshot.summary);
        assert_eq!(state.realtime, snapshot.realtime);
        assert!(state.last_refresh_timestamp().is_some());
    }

    #[test]
    fn refresh_is_a_wholesale_replacement_not_a_merge() {
        let mut state = state();
        state.add_event(snapshot_event(MetricsSnapshot {
            summary: vec![summary_record("2024-01-01", "C1"), summary_record("2024-01-02", "C2")],
            realtime: vec![realtime_record("10:00"), realtime_record("10:01")],
        }));
        state.update();

        let replacement = MetricsSnapshot {
            summary: vec![summary_record("2024-01-03", "C3")],
            realtime: vec![realtime_record("10:02")],
        };
        state.add_event(snapshot_event(replacement.clone()));
        state.update();

        assert_eq!(state.summary, replacement.summary);
        assert_eq!(state.realtime, replacement.realtime);
    }

    #[test]
    fn first_failure_moves_to_error_with_the_fixed_message() {
        let mut state = state();
        state.add_event(failure_event());
        state.update();

        assert_eq!(
            *state.view_state(),
            ViewState::Error("Failed to fetch data".to_string())
        );
        assert!(state.summary.is_empty());
    }

    #[test]
    fn failure_after_success_keeps_prior_series() {
        let mut state = state();
        let snapshot = MetricsSnapshot {
            summary: vec![summary_record("2024-01-01", "C1")],
            realtime: vec![realtime_record("10:00")],
        };
        state.add_event(snapshot_event(snapshot.clone()));
        state.update();
        state.add_event(failure_event());
        state.update();

        assert!(matches!(state.view_state(), ViewState::Error(_)));
        assert_eq!(state.summary, snapshot.summary);
        assert_eq!(state.realtime, snapshot.realtime);
    }

    #[test]
    fn error_clears_after_successful_cycle() {
        let mut state = state();
        state.add_event(failure_event());
        state.update();
        assert!(matches!(state.view_state(), ViewState::Error(_)));

        state.add_event(snapshot_event(MetricsSnapshot {
            summary: vec![summary_record("2024-01-01", "C1")],
            realtime: vec![realtime_record("10:00")],
        }));
        state.update();

        assert_eq!(*state.view_state(), ViewState::Ready);
        assert_eq!(state.summary.len(), 1);
    }

    #[test]
    fn repeated_identical_snapshot_leaves_state_unchanged() {
        let mut state = state();
        let snapshot = MetricsSnapshot {
            summary: vec![summary_record("2024-01-01", "C1")],
            realtime: vec![realtime_record("10:00")],
        };
        state.add_event(snapshot_event(snapshot.clone()));
        state.update();
        let summary_before = state.summary.clone();
        let realtime_before = state.realtime.clone();

        state.add_event(snapshot_event(snapshot));
        state.update();

        assert_eq!(state.summary, summary_before);
        assert_eq!(state.realtime, realtime_before);
        assert_eq!(*state.view_state(), ViewState::Ready);
    }

    #[test]
    fn waiting_event_arms_the_refresh_countdown() {
        let mut state = state();
        state.add_event(Event::poller_with_level(
            "Next refresh in 60s".to_string(),
            EventType::Waiting,
            LogLevel::Debug,
        ));
        state.update();

        assert_eq!(state.refresh_info.interval_secs, 60);
        assert!(!state.refresh_info.due_now);
    }

    #[test]
    fn refresh_event_marks_a_fetch_in_flight_until_the_cycle_settles() {
        let mut state = state();
        state.add_event(Event::poller_with_level(
            "Fetching campaign metrics...".to_string(),
            EventType::Refresh,
            LogLevel::Debug,
        ));
        state.update();
        assert!(matches!(
            state.fetching_state(),
            FetchingState::Active { .. }
        ));

        state.add_event(failure_event());
        state.update();
        assert!(matches!(state.fetching_state(), FetchingState::Idle));
    }
}
