use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{BarChart, Block, Borders, Cell, Row, Sparkline, Table};
use ratatui::Frame;

use crate::aggregate::{by_day_of_week, by_hour_of_day, by_month, by_repository};
use crate::model::Snapshot;
use crate::tui::draw::{intensity_bar, intensity_color};
use crate::util::DAY_ABBREV;

use super::{header_cell, truncate};

/// Render the distribution charts: day-of-week bars, hour-of-day and monthly
/// sparklines, and the per-repository table. These always run over the full
/// record set, regardless of the heatmap's repository filter.
pub fn draw_charts_view(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let records = &snapshot.records;

    let day_counts = by_day_of_week(records, &Local);
    let day_data: Vec<(&str, u64)> = DAY_ABBREV
        .iter()
        .zip(day_counts.iter())
        .map(|(label, count)| (*label, *count as u64))
        .collect();
    let day_chart = BarChart::default()
        .block(
            Block::default()
                .title("Commits by Day of Week")
                .borders(Borders::ALL),
        )
        .data(&day_data)
        .bar_width(4)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green));
    f.render_widget(day_chart, top[0]);

    let hour_counts: Vec<u64> = by_hour_of_day(records, &Local)
        .iter()
        .map(|&c| c as u64)
        .collect();
    let hour_sparkline = Sparkline::default()
        .block(
            Block::default()
                .title("Commits by Hour (12 AM to 11 PM)")
                .borders(Borders::ALL),
        )
        .data(&hour_counts)
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(hour_sparkline, top[1]);

    let month_counts: Vec<u64> = by_month(records, &Local).iter().map(|&c| c as u64).collect();
    let month_sparkline = Sparkline::default()
        .block(
            Block::default()
                .title("Commits by Month (Jan to Dec)")
                .borders(Borders::ALL),
        )
        .data(&month_counts)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(month_sparkline, bottom[0]);

    let repo_counts = by_repository(records);
    let max_repo = repo_counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let repo_rows: Vec<Row> = repo_counts
        .iter()
        .map(|(name, count)| {
            Row::new(vec![
                Cell::from(truncate(name, 28)).style(Style::default().fg(Color::Cyan)),
                Cell::from(format!("{:>4} {}", count, intensity_bar(*count, max_repo)))
                    .style(intensity_color(*count, max_repo)),
            ])
        })
        .collect();
    let repo_table = Table::new(
        repo_rows,
        [Constraint::Length(30), Constraint::Percentage(100)],
    )
    .header(Row::new([
        header_cell("Repository", Color::Yellow),
        header_cell("Commits", Color::Green),
    ]))
    .block(
        Block::default()
            .title("Commits by Repository")
            .borders(Borders::ALL),
    );
    f.render_widget(repo_table, bottom[1]);
}
