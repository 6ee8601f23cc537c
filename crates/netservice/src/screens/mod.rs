//! Terminal layouts backing the screens of `netservice_core`.
//!
//! The navigation controller treats these as opaque: it builds one per screen
//! through [`TerminalUiBuilder`] and only tells it when it becomes visible or
//! hidden. Everything about drawing and key handling lives here.

pub mod config;
pub mod function;

use netservice_core::{ScreenError, ScreenKind, ScreenUi, UiBuilder};
use ratatui::{Frame, layout::Rect};

use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;

use config::ConfigPanel;
use function::FunctionPanel;

/// Layout of one screen in the chain.
pub enum TerminalUi {
    Function(FunctionPanel),
    Config(ConfigPanel),
}

impl TerminalUi {
    pub fn kind(&self) -> ScreenKind {
        match self {
            TerminalUi::Function(_) => ScreenKind::Function,
            TerminalUi::Config(_) => ScreenKind::Config,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            TerminalUi::Function(panel) => panel.visible,
            TerminalUi::Config(panel) => panel.visible,
        }
    }
}

impl ScreenUi for TerminalUi {
    fn set_visible(&mut self, visible: bool) {
        tracing::trace!(screen = %self.kind(), visible, "layout visibility changed");
        match self {
            TerminalUi::Function(panel) => panel.visible = visible,
            TerminalUi::Config(panel) => panel.visible = visible,
        }
    }
}

impl Component for TerminalUi {
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult {
        if !self.is_visible() {
            return EventResult::NotHandled;
        }
        match self {
            TerminalUi::Function(panel) => panel.handle_key(key, state),
            TerminalUi::Config(panel) => panel.handle_key(key, state),
        }
    }

    /// Hidden layouts draw nothing.
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if !self.is_visible() {
            return;
        }
        match self {
            TerminalUi::Function(panel) => panel.render(frame, area, state),
            TerminalUi::Config(panel) => panel.render(frame, area, state),
        }
    }
}

/// Builds terminal layouts for the navigation controller.
#[derive(Debug, Default)]
pub struct TerminalUiBuilder;

impl UiBuilder for TerminalUiBuilder {
    type Ui = TerminalUi;

    fn build(&mut self, kind: ScreenKind) -> Result<TerminalUi, ScreenError> {
        tracing::debug!(screen = %kind, "building terminal layout");
        Ok(match kind {
            ScreenKind::Function => TerminalUi::Function(FunctionPanel::new()),
            ScreenKind::Config => TerminalUi::Config(ConfigPanel::new()),
        })
    }
}
