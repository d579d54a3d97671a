//! Dashboard header component
//!
//! Renders the title and refresh countdown gauge

use super::super::state::{DashboardState, FetchingState};
use super::super::utils::format_compact_timestamp;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title, environment, and refresh countdown.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section with environment and last-refresh info
    let version = env!("CARGO_PKG_VERSION");
    let title_text = match state.last_refresh_timestamp() {
        Some(timestamp) => format!(
            "AD ANALYTICS DASHBOARD v{} [{}] | Updated {}",
            version,
            state.environment,
            format_compact_timestamp(timestamp)
        ),
        None => format!("AD ANALYTICS DASHBOARD v{} [{}]", version, state.environment),
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Gauge logic: an active fetch takes priority, then the countdown
    let (progress_text, gauge_color, progress_percent) = match state.fetching_state() {
        FetchingState::Active { started_at } => {
            // Animated gauge while a cycle is in flight - loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            let elapsed = started_at.elapsed().as_secs();
            let display_text = if elapsed > 0 {
                format!("REFRESHING - Fetching campaign metrics ({}s)", elapsed)
            } else {
                "REFRESHING - Fetching campaign metrics".to_string()
            };
            (display_text, Color::LightGreen, progress)
        }
        FetchingState::Idle => {
            let info = &state.refresh_info;
            if !info.due_now && info.interval_secs > 0 {
                let remaining_secs = info.interval_secs.saturating_sub(info.elapsed_secs);
                let progress =
                    ((info.elapsed_secs as f64 / info.interval_secs as f64) * 100.0) as u16;
                (
                    format!("WAITING - Next refresh in {}s", remaining_secs),
                    Color::LightBlue,
                    progress.min(100),
                )
            } else {
                ("WAITING - Refresh due".to_string(), Color::LightBlue, 100)
            }
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
