use chrono::{Datelike, Local};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::aggregate::by_calendar_date;
use crate::model::{DateCount, Snapshot};
use crate::tui::draw::{intensity_bar, intensity_color};
use crate::tui::layout::get_visible_days;
use crate::tui::state::TuiState;
use crate::util::DAY_NAMES;

use super::header_cell;

/// Render the calendar heatmap view: one row per day in the window plus a
/// side panel for the selected day. This is the only view that honors the
/// repository filter.
pub fn draw_heatmap_view(f: &mut Frame, area: Rect, snapshot: &Snapshot, state: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let filter = state.filter(snapshot);
    let records = snapshot.filtered_records(&filter);
    let today = Local::now().date_naive();
    let days = by_calendar_date(&records, snapshot.window_days, today, &Local);
    let max_count = days.iter().map(|d| d.count).max().unwrap_or(0);

    let visible_days = get_visible_days(&days, state, f.size().height as usize);
    let rows: Vec<Row> = visible_days
        .iter()
        .map(|(day, is_selected)| {
            let date_label = if *is_selected {
                format!("{} ◄", day.date.format("%Y-%m-%d"))
            } else {
                day.date.format("%Y-%m-%d").to_string()
            };
            let date_cell = if *is_selected {
                Cell::from(date_label).style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from(date_label).style(Style::default().fg(Color::White))
            };

            let weekday = day.date.format("%a").to_string();
            let weekday_cell = Cell::from(weekday).style(Style::default().fg(Color::Magenta));

            let commits_cell = Cell::from(format!(
                "{:>3} {}",
                day.count,
                intensity_bar(day.count, max_count)
            ))
            .style(intensity_color(day.count, max_count));

            Row::new(vec![date_cell, weekday_cell, commits_cell])
        })
        .collect();

    let title = format!(
        "Heatmap: last {} days | filter: {} ('f' to cycle, 'h' for help)",
        snapshot.window_days,
        filter.label()
    );

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(5),
            Constraint::Percentage(100),
        ],
    )
    .header(Row::new([
        header_cell("Date", Color::Yellow),
        header_cell("Day", Color::Magenta),
        header_cell("Commits", Color::Green),
    ]))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    f.render_widget(table, chunks[0]);
    draw_day_panel(f, chunks[1], &days, max_count, state);
}

fn draw_day_panel(f: &mut Frame, area: Rect, days: &[DateCount], max_count: u32, state: &TuiState) {
    if days.is_empty() {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let selected = &days[state.selected.min(days.len() - 1)];
    let weekday = selected.date.weekday().num_days_from_sunday() as usize;

    let day_lines = vec![
        Line::from(vec![Span::styled(
            "Selected Day",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(Color::White)),
            Span::styled(
                selected.date.format("%Y-%m-%d").to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Weekday: ", Style::default().fg(Color::White)),
            Span::styled(DAY_NAMES[weekday], Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::styled("Commits: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", selected.count),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled("Intensity: ", Style::default().fg(Color::White)),
            Span::styled(
                intensity_bar(selected.count, max_count),
                intensity_color(selected.count, max_count),
            ),
        ]),
    ];

    let day_panel = Paragraph::new(day_lines).block(
        Block::default()
            .title("Day")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(day_panel, chunks[0]);

    let total: u32 = days.iter().map(|d| d.count).sum();
    let active_days = days.iter().filter(|d| d.count > 0).count();

    let window_lines = vec![
        Line::from(vec![Span::styled(
            "Window Totals",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(vec![
            Span::styled("Commits: ", Style::default().fg(Color::White)),
            Span::styled(format!("{total}"), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Active days: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{active_days}/{}", days.len()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Peak day: ", Style::default().fg(Color::White)),
            Span::styled(format!("{max_count}"), Style::default().fg(Color::Red)),
        ]),
    ];

    let window_panel = Paragraph::new(window_lines).block(
        Block::default()
            .title("Window")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(window_panel, chunks[1]);
}
