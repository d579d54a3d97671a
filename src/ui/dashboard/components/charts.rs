//! Dashboard chart components
//!
//! Renders the two time-series line charts: campaign performance per day and
//! realtime performance per minute. Records are plotted at their received
//! index, so the backend's ordering is preserved as-is.

use super::super::state::DashboardState;
use crate::metrics::format_grouped;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::symbols;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

/// Render campaign performance over time (impressions and clicks per day).
pub fn render_summary_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let impressions: Vec<(f64, f64)> = state
        .summary
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.total_impressions as f64))
        .collect();
    let clicks: Vec<(f64, f64)> = state
        .summary
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.total_clicks as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Impressions")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&impressions),
        Dataset::default()
            .name("Clicks")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&clicks),
    ];

    let dates: Vec<&str> = state.summary.iter().map(|r| r.date.as_str()).collect();
    let y_upper = max_y(&impressions).max(max_y(&clicks)).max(1.0);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("CAMPAIGN PERFORMANCE OVER TIME")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_upper(state.summary.len())])
                .labels(sparse_labels(&dates)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_upper])
                .labels(y_axis_labels(y_upper)),
        );
    f.render_widget(chart, area);
}

/// Render realtime performance (impressions, clicks, and CTR per minute).
pub fn render_realtime_chart(f: &mut Frame, area: Rect, state: &DashboardState) {
    let impressions: Vec<(f64, f64)> = state
        .realtime
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.impressions as f64))
        .collect();
    let clicks: Vec<(f64, f64)> = state
        .realtime
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.clicks as f64))
        .collect();
    let ctr: Vec<(f64, f64)> = state
        .realtime
        .iter()
        .enumerate()
        .map(|(i, r)| (i as f64, r.avg_ctr))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("Impressions")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&impressions),
        Dataset::default()
            .name("Clicks")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&clicks),
        Dataset::default()
            .name("CTR (%)")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&ctr),
    ];

    let minutes: Vec<&str> = state.realtime.iter().map(|r| r.minute.as_str()).collect();
    let y_upper = max_y(&impressions)
        .max(max_y(&clicks))
        .max(max_y(&ctr))
        .max(1.0);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title("REALTIME PERFORMANCE")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_upper(state.realtime.len())])
                .labels(sparse_labels(&minutes)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_upper])
                .labels(y_axis_labels(y_upper)),
        );
    f.render_widget(chart, area);
}

fn max_y(points: &[(f64, f64)]) -> f64 {
    points.iter().map(|&(_, y)| y).fold(0.0, f64::max)
}

fn x_upper(len: usize) -> f64 {
    if len > 1 { (len - 1) as f64 } else { 1.0 }
}

/// First, middle, and last label of the series - enough to orient the axis
/// without crowding it.
fn sparse_labels(labels: &[&str]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].to_string()],
        2 => vec![labels[0].to_string(), labels[1].to_string()],
        n => vec![
            labels[0].to_string(),
            labels[n / 2].to_string(),
            labels[n - 1].to_string(),
        ],
    }
}

fn y_axis_labels(upper: f64) -> Vec<String> {
    vec![
        "0".to_string(),
        format_grouped((upper / 2.0).round() as u64),
        format_grouped(upper.round() as u64),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_labels_keep_first_middle_and_last_in_order() {
        assert!(sparse_labels(&[]).is_empty());
        assert_eq!(sparse_labels(&["a"]), vec!["a"]);
        assert_eq!(sparse_labels(&["a", "b"]), vec!["a", "b"]);
        assert_eq!(
            sparse_labels(&["01-01", "01-02", "01-03", "01-04", "01-05"]),
            vec!["01-01", "01-03", "01-05"]
        );
    }

    #[test]
    fn y_labels_span_zero_to_the_series_maximum() {
        assert_eq!(y_axis_labels(42000.0), vec!["0", "21,000", "42,000"]);
    }

    #[test]
    fn x_bounds_cover_single_point_series() {
        assert_eq!(x_upper(0), 1.0);
        assert_eq!(x_upper(1), 1.0);
        assert_eq!(x_upper(5), 4.0);
    }
}
