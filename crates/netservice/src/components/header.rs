use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR};
use netservice_core::ScreenKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
};

/// Breadcrumb of the screen chain with the visible screen highlighted.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Header {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let visible = state.nav.map(|nav| nav.visible_screen());

        let titles: Vec<Line> = ScreenKind::ALL
            .iter()
            .map(|kind| {
                let style = if Some(*kind) == visible {
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(kind.name(), style))
            })
            .collect();

        let selected = visible.and_then(|kind| ScreenKind::ALL.iter().position(|k| *k == kind));

        let tabs = Tabs::new(titles)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(Span::styled(" Network Service ", Style::default().fg(HEADER_COLOR))),
            )
            .select(selected)
            .divider(" > ")
            .highlight_style(
                Style::default()
                    .fg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(tabs, area);
    }
}
