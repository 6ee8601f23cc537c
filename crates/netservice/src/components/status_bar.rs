use super::{Component, EventResult};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{ERROR_COLOR, HELP_COLOR};
use netservice_core::NavState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// Help text for the visible screen, built from the active bindings.
    pub fn help_text(state: &AppState) -> String {
        let kb = &state.keybindings;
        let key = KeybindingsConfig::display;

        match state.nav {
            Some(NavState::FunctionVisible) => format!(
                "{}: configure | {}: close | {}: quit",
                key(&kb.function.open_config),
                key(&kb.function.back),
                key(&kb.global.quit)
            ),
            Some(NavState::ConfigVisible) => format!(
                "{}/{}: select | {}/{}: change | {}: back | {}: quit",
                key(&kb.config.up),
                key(&kb.config.down),
                key(&kb.config.prev_option),
                key(&kb.config.next_option),
                key(&kb.config.back),
                key(&kb.global.quit)
            ),
            None => format!("{}: quit", key(&kb.global.quit)),
        }
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: &AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(ERROR_COLOR)),
                Span::raw(error.as_str()),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_follows_navigation() {
        let mut state = AppState::default();

        state.nav = Some(NavState::FunctionVisible);
        assert_eq!(
            StatusBar::help_text(&state),
            "c: configure | q: close | ctrl+c: quit"
        );

        state.nav = Some(NavState::ConfigVisible);
        assert_eq!(
            StatusBar::help_text(&state),
            "k/j: select | h/l: change | esc: back | ctrl+c: quit"
        );
    }
}
