use netservice_core::NavState;

use crate::data::keybindings_data::KeybindingsConfig;

use super::{ConfirmModal, ModalAction, ModalState, ServiceSettings};

/// State shared between the presenter, its components and modals.
#[derive(Debug)]
pub struct AppState {
    /// Mirror of the function screen's navigation state, refreshed after every event
    pub nav: Option<NavState>,
    pub modal: ModalState,
    pub settings: ServiceSettings,
    /// Row highlighted on the configuration screen
    pub selected_setting: usize,
    pub keybindings: KeybindingsConfig,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            nav: None,
            modal: ModalState::None,
            settings: ServiceSettings::default(),
            selected_setting: 0,
            keybindings: KeybindingsConfig::default(),
            error_message: None,
            exit: false,
        }
    }
}

impl AppState {
    pub fn set_error(&mut self, msg: String) {
        tracing::warn!(error = %msg, "Showing error");
        self.error_message = Some(msg);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    pub fn confirm_leave(&mut self) {
        self.modal = ModalState::Confirm(ConfirmModal::new(
            "Leave",
            "Leave the service console?",
            ModalAction::Leave,
        ));
    }

    pub fn select_next_setting(&mut self) {
        let len = self.settings.settings.len();
        if len > 0 {
            self.selected_setting = (self.selected_setting + 1) % len;
        }
    }

    pub fn select_prev_setting(&mut self) {
        let len = self.settings.settings.len();
        if len > 0 {
            if self.selected_setting == 0 {
                self.selected_setting = len - 1;
            } else {
                self.selected_setting -= 1;
            }
        }
    }
}
