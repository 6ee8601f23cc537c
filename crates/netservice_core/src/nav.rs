use std::fmt;

use crate::screen::ScreenKind;

/// Navigation state shared by the function screen and its configuration screen.
///
/// Exactly one screen is visible in every state. Closing the function screen
/// is an exit from the chain, not a state within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavState {
    FunctionVisible,
    ConfigVisible,
}

impl NavState {
    /// The screen that is on display in this state.
    pub fn visible_screen(&self) -> ScreenKind {
        match self {
            NavState::FunctionVisible => ScreenKind::Function,
            NavState::ConfigVisible => ScreenKind::Config,
        }
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavState::FunctionVisible => write!(f, "FUNCTION_VISIBLE"),
            NavState::ConfigVisible => write!(f, "CONFIG_VISIBLE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_screen() {
        assert_eq!(
            NavState::FunctionVisible.visible_screen(),
            ScreenKind::Function
        );
        assert_eq!(NavState::ConfigVisible.visible_screen(), ScreenKind::Config);
    }
}
