//! Dashboard main renderer
//!
//! Lays out the screen and dispatches the three content states: the loading
//! indicator, the error banner, or the charts and table.

use super::components::{charts, footer, header, table};
use super::state::{DashboardState, ViewState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(35),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    // Loading and error take over the whole content area; charts and table
    // are only ever drawn in the ready state.
    let content_area = main_chunks[1].union(main_chunks[2]);
    match state.view_state() {
        ViewState::Loading => render_loading(f, content_area, state),
        ViewState::Error(message) => render_error(f, content_area, message),
        ViewState::Ready => {
            let chart_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(main_chunks[1]);

            charts::render_summary_chart(f, chart_chunks[0], state);
            charts::render_realtime_chart(f, chart_chunks[1], state);
            table::render_campaign_table(f, main_chunks[2], state);
        }
    }

    footer::render_footer(f, main_chunks[3]);
}

/// Centered loading indicator shown until the first fetch cycle completes.
fn render_loading(f: &mut Frame, area: Rect, state: &DashboardState) {
    let dots = ".".repeat((state.tick / 5) % 4);
    let loading = Paragraph::new(format!("Loading{}", dots))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(loading, area);
}

/// Error banner shown after a failed fetch cycle.
fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(format!("Error: {}", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Red)),
        );
    f.render_widget(error, area);
}
