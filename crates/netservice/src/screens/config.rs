use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem},
};

use crate::components::{EventResult, NavRequest};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::styles::{focused_block_with_help, row_style};

/// The configuration screen: network settings, changed in place.
#[derive(Debug, Default)]
pub struct ConfigPanel {
    pub visible: bool,
}

impl ConfigPanel {
    pub fn new() -> Self {
        Self { visible: false }
    }

    pub fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        let kb = &state.keybindings.config;

        if KeybindingsConfig::matches(key, &kb.back) {
            return EventResult::Navigate(NavRequest::ConfigBack);
        }

        if KeybindingsConfig::matches(key, &kb.down) {
            state.select_next_setting();
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(key, &kb.up) {
            state.select_prev_setting();
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(key, &kb.next_option) {
            let idx = state.selected_setting;
            if let Some(setting) = state.settings.settings.get_mut(idx) {
                setting.next_option();
                tracing::debug!(
                    setting = setting.key.label(),
                    value = setting.value(),
                    "setting changed"
                );
            }
            return EventResult::Handled;
        }

        if KeybindingsConfig::matches(key, &kb.prev_option) {
            let idx = state.selected_setting;
            if let Some(setting) = state.settings.settings.get_mut(idx) {
                setting.prev_option();
                tracing::debug!(
                    setting = setting.key.label(),
                    value = setting.value(),
                    "setting changed"
                );
            }
            return EventResult::Handled;
        }

        EventResult::NotHandled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .settings
            .settings
            .iter()
            .enumerate()
            .map(|(idx, setting)| {
                let selected = idx == state.selected_setting;
                let marker = if selected { "> " } else { "  " };
                let line = Line::from(vec![
                    Span::styled(
                        format!("{marker}{:<10}", setting.key.label()),
                        row_style(selected),
                    ),
                    Span::styled(format!("< {} >", setting.value()), row_style(selected)),
                ]);
                ListItem::new(line)
            })
            .collect();

        let block = focused_block_with_help(" CONFIGURATION ", "values are not saved");
        frame.render_widget(List::new(items).block(block), area);
    }
}
