use std::fmt;

use crate::error::ScreenError;

/// Identifies which screen of the chain a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Function,
    Config,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 2] = [ScreenKind::Function, ScreenKind::Config];

    pub fn name(&self) -> &'static str {
        match self {
            ScreenKind::Function => "Function",
            ScreenKind::Config => "Configuration",
        }
    }
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// A presentable unit with show/hide operations.
pub trait Screen {
    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}

/// Layout collaborator backing a screen.
///
/// The navigation layer never looks inside it; it only reports visibility
/// changes so the collaborator can draw or tear down its widgets.
pub trait ScreenUi {
    fn set_visible(&mut self, visible: bool);
}

/// Produces the layout collaborator for a screen at construction time.
///
/// Construction may fail (for example when the windowing layer runs out of
/// resources). Failures are not retried here; they propagate to the caller.
pub trait UiBuilder {
    type Ui: ScreenUi;

    fn build(&mut self, kind: ScreenKind) -> Result<Self::Ui, ScreenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_defaults_to_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!Visibility::Hidden.is_shown());
        assert!(Visibility::Shown.is_shown());
    }

    #[test]
    fn test_screen_kind_names() {
        assert_eq!(ScreenKind::Function.to_string(), "Function");
        assert_eq!(ScreenKind::Config.to_string(), "Configuration");
        assert_eq!(ScreenKind::ALL.len(), 2);
    }
}
