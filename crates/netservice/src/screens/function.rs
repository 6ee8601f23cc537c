use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::components::{EventResult, NavRequest};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::{AppState, SettingKey};
use crate::util::styles::{HEADER_COLOR, focused_block_with_help};

/// The entry screen: a summary of the service and the actions available.
#[derive(Debug, Default)]
pub struct FunctionPanel {
    pub visible: bool,
}

impl FunctionPanel {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let kb = &state.keybindings;

        if KeybindingsConfig::matches(key, &kb.function.open_config) {
            return EventResult::Navigate(NavRequest::OpenConfig);
        }

        if KeybindingsConfig::matches(key, &kb.function.back) {
            return EventResult::Navigate(NavRequest::Back);
        }

        EventResult::NotHandled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(area);

        self.render_summary(frame, chunks[0], state);
        self.render_actions(frame, chunks[1], state);
    }

    fn render_summary(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let settings = &state.settings;

        let lines = vec![
            Line::from(Span::styled(
                "SERVICE",
                Style::default()
                    .fg(HEADER_COLOR)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("  Endpoint:   {}", settings.endpoint())),
            Line::from(format!(
                "  Timeout:    {}",
                settings.get(SettingKey::Timeout)
            )),
        ];

        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" FUNCTION "));
        frame.render_widget(paragraph, area);
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let kb = &state.keybindings;

        let lines = vec![
            Line::from(format!(
                "  [{}] Open configuration",
                KeybindingsConfig::display(&kb.function.open_config)
            )),
            Line::from(format!(
                "  [{}] Close",
                KeybindingsConfig::display(&kb.function.back)
            )),
        ];

        let block = focused_block_with_help(" ACTIONS ", "changes are kept for this session");
        let paragraph = Paragraph::new(lines).block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;

    #[test]
    fn test_function_keys_map_to_navigation() {
        let mut panel = FunctionPanel::new();
        let mut state = AppState::default();

        let result = panel.handle_key(&AppKeyEvent::plain(KeyCode::Char('c')), &mut state);
        assert_eq!(result, EventResult::Navigate(NavRequest::OpenConfig));

        let result = panel.handle_key(&AppKeyEvent::plain(KeyCode::Esc), &mut state);
        assert_eq!(result, EventResult::Navigate(NavRequest::Back));

        let result = panel.handle_key(&AppKeyEvent::plain(KeyCode::Char('z')), &mut state);
        assert_eq!(result, EventResult::NotHandled);
    }
}
