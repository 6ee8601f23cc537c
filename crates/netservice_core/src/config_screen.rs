use crate::error::ScreenError;
use crate::screen::{Screen, ScreenKind, ScreenUi, UiBuilder, Visibility};

/// The configuration screen reached from a [`FunctionScreen`](crate::FunctionScreen).
///
/// Only the owning function screen can construct one, and it lives exactly as
/// long as its owner. It has no notification of its own: going back is driven
/// by the owner.
pub struct ConfigScreen<U> {
    ui: U,
    visibility: Visibility,
}

impl<U: ScreenUi> ConfigScreen<U> {
    pub(crate) fn construct<B>(builder: &mut B) -> Result<Self, ScreenError>
    where
        B: UiBuilder<Ui = U>,
    {
        let ui = builder.build(ScreenKind::Config)?;
        tracing::debug!("configuration screen constructed");
        Ok(Self {
            ui,
            visibility: Visibility::Hidden,
        })
    }

    pub(crate) fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }
}

impl<U: ScreenUi> Screen for ConfigScreen<U> {
    fn show(&mut self) {
        if self.visibility.is_shown() {
            return;
        }
        self.visibility = Visibility::Shown;
        self.ui.set_visible(true);
    }

    fn hide(&mut self) {
        if !self.visibility.is_shown() {
            return;
        }
        self.visibility = Visibility::Hidden;
        self.ui.set_visible(false);
    }

    fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }
}
