//! Campaign metrics table component
//!
//! Renders one row per summary record, in received order, with the same
//! formatting the upstream dashboard uses: grouped digits for counts,
//! two-decimal percentages and currency, alternating row backgrounds.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Row, Table};

/// Render the campaign metrics table.
pub fn render_campaign_table(f: &mut Frame, area: Rect, state: &DashboardState) {
    let header = Row::new(vec![
        "Date",
        "Campaign",
        "Impressions",
        "Clicks",
        "CTR",
        "CPC",
        "Spend",
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = state
        .summary
        .iter()
        .enumerate()
        .map(|(i, record)| Row::new(record.table_cells().to_vec()).style(row_style(i)))
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .title("CAMPAIGN METRICS")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(table, area);
}

/// Alternating row background by index parity: even rows are shaded, odd
/// rows keep the default background.
fn row_style(index: usize) -> Style {
    if index % 2 == 0 {
        Style::default().bg(Color::Rgb(24, 28, 36))
    } else {
        Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_alternate_background_starting_with_the_first() {
        assert!(row_style(0).bg.is_some());
        assert!(row_style(1).bg.is_none());
        assert_eq!(row_style(0), row_style(2));
        assert_ne!(row_style(0), row_style(1));
    }
}
