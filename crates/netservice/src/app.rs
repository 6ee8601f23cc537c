use std::cell::Cell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crossterm::event::{self, Event, KeyEventKind};
use netservice_core::{FunctionScreen, Screen, ScreenError};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::{
    Component, EventResult, NavRequest, header::Header, status_bar::StatusBar,
};
use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::AppKeyEvent;
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::screens::TerminalUiBuilder;
use crate::state::{AppState, ModalAction, ModalState};

/// Presents the function screen and reacts to it being closed.
pub struct App {
    state: AppState,
    header: Header,
    status_bar: StatusBar,
    screen: FunctionScreen<TerminalUiBuilder>,
    /// Set by the function screen's closed handler, drained after each event
    closed: Rc<Cell<bool>>,
}

impl App {
    /// Create the app with default keybindings and show the function screen.
    pub fn new() -> Result<Self, ScreenError> {
        Self::with_state(AppState::default())
    }

    /// Create app with a data directory path
    /// Writes a default keybindings file on first run
    pub fn with_data_dir(data_dir: PathBuf) -> color_eyre::Result<Self> {
        let state = AppState {
            keybindings: Self::load_keybindings(&data_dir),
            ..AppState::default()
        };

        Ok(Self::with_state(state)?)
    }

    fn load_keybindings(data_dir: &Path) -> KeybindingsConfig {
        if KeybindingsConfig::path(data_dir).exists() {
            return KeybindingsConfig::load_or_default(data_dir);
        }

        let keybindings = KeybindingsConfig::default();
        match keybindings.save(data_dir) {
            Ok(()) => tracing::info!("Wrote default keybindings"),
            Err(e) => tracing::warn!(error = %e, "Could not write default keybindings"),
        }
        keybindings
    }

    fn with_state(state: AppState) -> Result<Self, ScreenError> {
        let closed = Rc::new(Cell::new(false));
        let flag = closed.clone();

        let mut screen = FunctionScreen::new(TerminalUiBuilder, move || flag.set(true))?;
        screen.show();

        let mut app = Self {
            state,
            header: Header::new(),
            status_bar: StatusBar::new(),
            screen,
            closed,
        };
        app.sync_nav();
        Ok(app)
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: header, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.header.render(frame, chunks[0], &self.state);
        self.render_screens(frame, chunks[1]);
        self.status_bar.render(frame, chunks[2], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn render_screens(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(ui) = self.screen.visible_ui_mut() {
            ui.render(frame, area, &self.state);
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(AppKeyEvent::from(key_event))
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key: AppKeyEvent) {
        // Handle modal first if active
        if self.state.modal.is_active() {
            match handle_modal_key(&key, &self.state) {
                ModalResult::Confirmed(action) => self.handle_modal_result(action),
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                    self.state.clear_error();
                }
                ModalResult::Continue => {}
            }
            self.sync_nav();
            return;
        }

        if KeybindingsConfig::matches(&key, &self.state.keybindings.global.quit) {
            tracing::info!("Quit requested");
            self.state.exit = true;
            return;
        }

        let result = self
            .screen
            .visible_ui_mut()
            .map(|ui| ui.handle_key(&key, &mut self.state))
            .unwrap_or(EventResult::NotHandled);

        match result {
            EventResult::Navigate(request) => self.navigate(request),
            EventResult::Handled | EventResult::NotHandled => {}
        }

        if self.closed.replace(false) {
            self.on_function_closed();
        }
        self.sync_nav();
    }

    fn navigate(&mut self, request: NavRequest) {
        match request {
            NavRequest::Back => self.screen.on_back(),
            NavRequest::OpenConfig => {
                if let Err(e) = self.screen.on_open_config() {
                    tracing::error!(error = %e, "Could not open configuration");
                    self.state.set_error(e.to_string());
                }
            }
            NavRequest::ConfigBack => self.screen.on_config_back(),
        }
    }

    /// The function screen reported it was closed: ask before leaving.
    fn on_function_closed(&mut self) {
        self.state.confirm_leave();
    }

    fn handle_modal_result(&mut self, action: ModalAction) {
        self.state.modal = ModalState::None;
        match action {
            ModalAction::Leave => {
                tracing::info!("Leaving service console");
                self.screen.hide();
                self.state.exit = true;
            }
        }
    }

    fn sync_nav(&mut self) {
        self.state.nav = self.screen.state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyCode;
    use netservice_core::NavState;
    use crate::state::SettingKey;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(AppKeyEvent::plain(code));
    }

    #[test]
    fn test_starts_on_function_screen() {
        let app = App::new().unwrap();

        assert_eq!(app.state.nav, Some(NavState::FunctionVisible));
        assert!(!app.screen.is_config_constructed());
        assert!(!app.state.exit);
    }

    #[test]
    fn test_open_and_leave_configuration() {
        let mut app = App::new().unwrap();

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state.nav, Some(NavState::ConfigVisible));
        assert!(app.screen.is_config_constructed());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.nav, Some(NavState::FunctionVisible));
        assert!(!app.state.modal.is_active());

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.nav, Some(NavState::ConfigVisible));
    }

    #[test]
    fn test_keys_only_reach_the_visible_screen() {
        let mut app = App::new().unwrap();

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);

        assert_eq!(app.state.nav, Some(NavState::FunctionVisible));
        assert_eq!(app.state.selected_setting, 0);
        assert_eq!(app.state.settings.get(SettingKey::Port), "8080");
    }

    #[test]
    fn test_close_asks_for_confirmation() {
        let mut app = App::new().unwrap();

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.state.modal, ModalState::Confirm(_)));
        assert_eq!(app.state.nav, Some(NavState::FunctionVisible));

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.state.modal.is_active());
        assert!(!app.state.exit);
        assert_eq!(app.state.nav, Some(NavState::FunctionVisible));
    }

    #[test]
    fn test_confirmed_close_exits() {
        let mut app = App::new().unwrap();

        press(&mut app, KeyCode::Char('q'));
        press(&mut app, KeyCode::Char('y'));

        assert!(app.state.exit);
        assert_eq!(app.state.nav, None);
    }

    #[test]
    fn test_global_quit() {
        let mut app = App::new().unwrap();
        press(&mut app, KeyCode::Char('c'));

        app.handle_key_event(AppKeyEvent {
            code: KeyCode::Char('c'),
            ctrl: true,
            alt: false,
            shift: false,
        });

        assert!(app.state.exit);
    }

    #[test]
    fn test_settings_survive_round_trip() {
        let mut app = App::new().unwrap();

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.state.settings.get(SettingKey::Port), "8443");
        assert_eq!(app.state.selected_setting, 1);
        assert_eq!(app.state.nav, Some(NavState::ConfigVisible));
    }

    #[test]
    fn test_with_data_dir_writes_and_reads_keybindings() {
        let dir = tempfile::tempdir().unwrap();

        let app = App::with_data_dir(dir.path().to_path_buf()).unwrap();
        assert!(KeybindingsConfig::path(dir.path()).exists());
        assert_eq!(app.state.keybindings, KeybindingsConfig::default());

        let mut custom = KeybindingsConfig::default();
        custom.function.open_config = vec!["o".into()];
        custom.save(dir.path()).unwrap();

        let mut app = App::with_data_dir(dir.path().to_path_buf()).unwrap();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.state.nav, Some(NavState::FunctionVisible));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.state.nav, Some(NavState::ConfigVisible));
    }
}
