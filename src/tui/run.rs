use std::io;

use anyhow::Context;
use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::cli::CommonArgs;
use crate::github::{fetch_snapshot, GitHubClient};
use crate::model::Snapshot;

use super::state::{TuiState, ViewMode};
use super::views::{draw_charts_view, draw_heatmap_view, draw_help_overlay, draw_insights_view};

pub fn run(common: &CommonArgs) -> anyhow::Result<()> {
    let client = GitHubClient::new(common.token.clone());
    let snapshot = fetch_snapshot(&client, &common.user, common.days)
        .context("Failed to fetch commit activity")?;
    run_loop(&snapshot).context("Terminal UI failed")
}

fn run_loop(snapshot: &Snapshot) -> io::Result<()> {
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut state = TuiState::default();

    // One row per calendar day in the window, selection starts on today
    let day_count = snapshot.window_days as usize + 1;
    state.selected = day_count - 1;
    terminal.clear()?;

    loop {
        let draw_result = terminal.draw(|f| {
            let size = f.size();

            if state.show_help {
                draw_help_overlay(f, size);
                return;
            }

            let chunks = ratatui::layout::Layout::default()
                .direction(ratatui::layout::Direction::Vertical)
                .constraints([
                    ratatui::layout::Constraint::Length(3),
                    ratatui::layout::Constraint::Min(0),
                ])
                .split(size);

            let tabs = ratatui::widgets::Tabs::new(vec!["Heatmap", "Charts", "Insights"])
                .block(
                    ratatui::widgets::Block::default()
                        .borders(ratatui::widgets::Borders::ALL)
                        .title(format!("ghviz: {}", snapshot.user.login)),
                )
                .highlight_style(
                    ratatui::style::Style::default()
                        .fg(ratatui::style::Color::Yellow)
                        .add_modifier(ratatui::style::Modifier::BOLD),
                )
                .select(state.tab_index);
            f.render_widget(tabs, chunks[0]);

            state.view_mode = match state.tab_index {
                0 => ViewMode::Heatmap,
                1 => ViewMode::Charts,
                2 => ViewMode::Insights,
                _ => ViewMode::Heatmap,
            };

            match state.view_mode {
                ViewMode::Heatmap => draw_heatmap_view(f, chunks[1], snapshot, &state),
                ViewMode::Charts => draw_charts_view(f, chunks[1], snapshot),
                ViewMode::Insights => draw_insights_view(f, chunks[1], snapshot),
            }
        });

        if let Err(e) = draw_result {
            eprintln!("TUI draw error: {e}");
        }

        if poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key_event) = read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Esc if state.show_help => state.show_help = false,
                    KeyCode::Char('h') | KeyCode::F(1) => state.show_help = !state.show_help,
                    KeyCode::Tab => {
                        state.tab_index = (state.tab_index + 1) % 3;
                    }
                    KeyCode::BackTab => {
                        state.tab_index = if state.tab_index == 0 { 2 } else { state.tab_index - 1 };
                    }
                    KeyCode::Char('f') => state.cycle_filter_forward(snapshot),
                    KeyCode::Char('F') => state.cycle_filter_back(snapshot),
                    KeyCode::Left | KeyCode::Char('j') => {
                        state.selected = state.selected.saturating_sub(1);
                    }
                    KeyCode::Right | KeyCode::Char('k') => {
                        if state.selected + 1 < day_count {
                            state.selected += 1;
                        }
                    }
                    KeyCode::Home => state.selected = 0,
                    KeyCode::End => state.selected = day_count - 1,
                    KeyCode::PageUp => state.selected = state.selected.saturating_sub(10),
                    KeyCode::PageDown => {
                        state.selected = std::cmp::min(state.selected + 10, day_count - 1);
                    }
                    _ => {}
                }
            }
        }
    }

    terminal.clear()?;
    disable_raw_mode()?;
    Ok(())
}
