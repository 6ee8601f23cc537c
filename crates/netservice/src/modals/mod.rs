mod confirm;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;
use crate::state::{AppState, ModalAction, ModalState};

pub use confirm::render_confirm_modal;

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Modal confirmed with action
    Confirmed(ModalAction),
    /// Modal was cancelled
    Cancelled,
    /// Key was handled, modal still active
    Continue,
}

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::None => {}
        ModalState::Confirm(modal) => render_confirm_modal(frame, modal),
    }
}

/// Handle key events for the active modal
pub fn handle_modal_key(key: &AppKeyEvent, state: &AppState) -> ModalResult {
    match &state.modal {
        ModalState::None => ModalResult::Continue,
        ModalState::Confirm(modal) => confirm::handle_confirm_key(key, modal),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
