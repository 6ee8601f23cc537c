//! The entry screen of the chain.
//!
//! A [`FunctionScreen`] is created and shown by an external presenter. It owns
//! at most one [`ConfigScreen`], built the first time the user asks for it and
//! reused afterwards. Going back from the function screen itself does not
//! navigate anywhere; it fires the `closed` handler so the presenter can
//! decide what happens next.

use crate::config_screen::ConfigScreen;
use crate::error::ScreenError;
use crate::nav::NavState;
use crate::screen::{Screen, ScreenKind, ScreenUi, UiBuilder, Visibility};

/// Parameterless callback fired when the function screen is closed.
pub type ClosedHandler = Box<dyn FnMut()>;

pub struct FunctionScreen<B: UiBuilder> {
    builder: B,
    ui: B::Ui,
    visibility: Visibility,
    /// Empty until the first `on_open_config`, never emptied afterwards.
    config: Option<ConfigScreen<B::Ui>>,
    on_closed: ClosedHandler,
}

impl<B: UiBuilder> FunctionScreen<B> {
    /// Build the function screen's own layout. The configuration screen is
    /// not built here.
    ///
    /// The screen starts hidden; the presenter shows it.
    pub fn new(mut builder: B, on_closed: impl FnMut() + 'static) -> Result<Self, ScreenError> {
        let ui = builder.build(ScreenKind::Function)?;
        tracing::debug!("function screen constructed");

        Ok(Self {
            builder,
            ui,
            visibility: Visibility::Hidden,
            config: None,
            on_closed: Box::new(on_closed),
        })
    }

    /// Back action on the function screen: notify the presenter.
    ///
    /// Fires `closed` exactly once per call. Visibility and the configuration
    /// screen are left untouched; tearing the screen down is the presenter's job.
    pub fn on_back(&mut self) {
        tracing::info!("function screen closed");
        (self.on_closed)();
    }

    /// Navigate to the configuration screen, building it on first use.
    ///
    /// The function screen is hidden before the configuration screen is shown.
    /// If building fails nothing changes and the error is returned.
    pub fn on_open_config(&mut self) -> Result<(), ScreenError> {
        if self.config.is_none() {
            let config = ConfigScreen::construct(&mut self.builder)?;
            self.config = Some(config);
        }

        self.set_own_visibility(Visibility::Hidden);
        if let Some(config) = self.config.as_mut() {
            config.show();
        }

        tracing::debug!(state = %NavState::ConfigVisible, "navigated to configuration");
        Ok(())
    }

    /// Back action on the configuration screen: swap back to this screen.
    ///
    /// Does nothing unless the configuration screen is currently visible.
    pub fn on_config_back(&mut self) {
        let Some(config) = self.config.as_mut().filter(|c| c.is_visible()) else {
            tracing::debug!("configuration back ignored, screen not visible");
            return;
        };

        config.hide();
        self.set_own_visibility(Visibility::Shown);

        tracing::debug!(state = %NavState::FunctionVisible, "returned from configuration");
    }

    /// Current navigation state, or `None` while neither screen is shown.
    pub fn state(&self) -> Option<NavState> {
        if self.is_config_visible() {
            Some(NavState::ConfigVisible)
        } else if self.visibility.is_shown() {
            Some(NavState::FunctionVisible)
        } else {
            None
        }
    }

    pub fn is_config_constructed(&self) -> bool {
        self.config.is_some()
    }

    /// Layout of whichever screen is currently shown, or `None` while the
    /// chain is hidden. A hidden layout is never handed out.
    pub fn visible_ui_mut(&mut self) -> Option<&mut B::Ui> {
        match self.state()? {
            NavState::FunctionVisible => Some(&mut self.ui),
            NavState::ConfigVisible => self.config.as_mut().map(|c| c.ui_mut()),
        }
    }

    fn is_config_visible(&self) -> bool {
        self.config.as_ref().is_some_and(|c| c.is_visible())
    }

    fn set_own_visibility(&mut self, visibility: Visibility) {
        if self.visibility == visibility {
            return;
        }
        self.visibility = visibility;
        self.ui.set_visible(visibility.is_shown());
    }
}

impl<B: UiBuilder> Screen for FunctionScreen<B> {
    /// Show the function screen. A visible configuration screen is hidden
    /// first so the two never share the display.
    fn show(&mut self) {
        if let Some(config) = self.config.as_mut() {
            config.hide();
        }
        self.set_own_visibility(Visibility::Shown);
    }

    /// Hide the whole chain.
    fn hide(&mut self) {
        if let Some(config) = self.config.as_mut() {
            config.hide();
        }
        self.set_own_visibility(Visibility::Hidden);
    }

    fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }
}
