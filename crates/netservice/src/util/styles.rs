//! Common styling utilities for TUI components

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

/// Standard color for focused panels and the highlighted row
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for errors
pub const ERROR_COLOR: Color = Color::Red;

/// Create a block with a title and a highlighted border.
pub fn focused_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_COLOR))
        .title(title.to_string())
}

/// Create a focused block with help text along the bottom border.
pub fn focused_block_with_help(title: &str, help_text: &str) -> Block<'static> {
    let block = focused_block(title);
    if help_text.is_empty() {
        return block;
    }
    block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR))
}

/// Style for a list row, highlighted when selected.
pub fn row_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(FOCUS_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}
