use ratatui::style::{Color, Modifier, Style};

use crate::aggregate::heatmap_level;

const GLYPHS: [&str; 5] = ["░", "▁", "▃", "▅", "█"];

/// Returns a fixed-width (3) bar built from the cell's heatmap level.
pub fn intensity_bar(count: u32, max: u32) -> String {
    GLYPHS[heatmap_level(count, max) as usize].repeat(3)
}

/// Chooses a style based on the cell's heatmap level.
pub fn intensity_color(count: u32, max: u32) -> Style {
    match heatmap_level(count, max) {
        0 => Style::default().fg(Color::Blue),
        1 => Style::default().fg(Color::Cyan),
        2 => Style::default().fg(Color::Green),
        3 => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}
