pub mod header;
pub mod status_bar;

use ratatui::Frame;

use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Navigation the presenter should perform on the function screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    /// Back on the function screen: report that it was closed
    Back,
    /// Show the configuration screen
    OpenConfig,
    /// Back on the configuration screen: return to the function screen
    ConfigBack,
}

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Event asks for a navigation step
    Navigate(NavRequest),
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: &AppKeyEvent, state: &mut AppState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState);
}
