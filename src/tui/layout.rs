use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::model::DateCount;
use crate::tui::state::TuiState;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Window of calendar days around the selection that fits the screen.
pub fn get_visible_days<'a>(
    days: &'a [DateCount],
    state: &TuiState,
    height: usize,
) -> Vec<(&'a DateCount, bool)> {
    let view_height = height.saturating_sub(8).max(1);
    if days.is_empty() {
        return Vec::new();
    }

    let selected = state.selected.min(days.len() - 1);
    let start = selected
        .saturating_sub(view_height / 2)
        .min(days.len().saturating_sub(view_height));
    let end = (start + view_height).min(days.len());

    days[start..end]
        .iter()
        .enumerate()
        .map(|(i, day)| (day, start + i == selected))
        .collect()
}
