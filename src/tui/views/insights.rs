use chrono::Local;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::insights::{average_commits_per_day, busiest_day, busiest_hour, busiest_repo};
use crate::model::Snapshot;
use crate::util::{hour_label, DAY_NAMES};

/// Render the scalar insights panel plus any per-repository fetch failures.
pub fn draw_insights_view(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let records = &snapshot.records;
    let busiest_day_label = busiest_day(records, &Local)
        .map(|(i, count)| format!("{} ({count} commits)", DAY_NAMES[i]))
        .unwrap_or_else(|| "n/a".to_string());
    let busiest_hour_label = busiest_hour(records, &Local)
        .map(|(h, count)| format!("{} ({count} commits)", hour_label(h)))
        .unwrap_or_else(|| "n/a".to_string());
    let busiest_repo_label = busiest_repo(records)
        .map(|(name, count)| format!("{name} ({count} commits)"))
        .unwrap_or_else(|| "n/a".to_string());
    let avg = average_commits_per_day(records.len(), snapshot.window_days);

    let mut lines = vec![
        Line::from(vec![Span::styled(
            format!("Insights for {}", snapshot.user.display_name()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Window: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("last {} days", snapshot.window_days),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total commits: ", Style::default().fg(Color::White)),
            Span::styled(format!("{}", records.len()), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Repositories: ", Style::default().fg(Color::White)),
            Span::styled(
                format!("{}", snapshot.repos.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Busiest day: ", Style::default().fg(Color::White)),
            Span::styled(busiest_day_label, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::styled("Busiest hour: ", Style::default().fg(Color::White)),
            Span::styled(busiest_hour_label, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::styled("Busiest repository: ", Style::default().fg(Color::White)),
            Span::styled(busiest_repo_label, Style::default().fg(Color::Magenta)),
        ]),
        Line::from(vec![
            Span::styled("Average commits/day: ", Style::default().fg(Color::White)),
            Span::styled(format!("{avg}"), Style::default().fg(Color::Magenta)),
        ]),
    ];

    if snapshot.skipped > 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            format!(
                "{} commit(s) skipped: no parseable author timestamp",
                snapshot.skipped
            ),
            Style::default().fg(Color::Yellow),
        )]));
    }

    let insights_panel = Paragraph::new(lines).block(
        Block::default()
            .title("Insights")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(insights_panel, chunks[0]);

    let failure_lines: Vec<Line> = if snapshot.failures.is_empty() {
        vec![Line::from(Span::styled(
            "All repositories fetched cleanly",
            Style::default().fg(Color::Green),
        ))]
    } else {
        snapshot
            .failures
            .iter()
            .take(10)
            .map(|failure| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", failure.repo),
                        Style::default().fg(Color::Red),
                    ),
                    Span::styled(failure.error.clone(), Style::default().fg(Color::Gray)),
                ])
            })
            .collect()
    };

    let failures_panel = Paragraph::new(failure_lines).block(
        Block::default()
            .title(format!("Fetch Failures ({})", snapshot.failures.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(failures_panel, chunks[1]);
}
