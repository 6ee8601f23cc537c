use std::fmt;

use crate::screen::ScreenKind;

/// Errors raised while constructing a screen's layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    /// The UI builder could not produce a layout for this screen
    Build { kind: ScreenKind, reason: String },
}

impl ScreenError {
    pub fn build(kind: ScreenKind, reason: impl Into<String>) -> Self {
        ScreenError::Build {
            kind,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            ScreenError::Build { kind, .. } => *kind,
        }
    }
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::Build { kind, reason } => {
                write!(f, "failed to build {kind} screen: {reason}")
            }
        }
    }
}

impl std::error::Error for ScreenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_display() {
        let err = ScreenError::build(ScreenKind::Config, "out of widgets");
        assert_eq!(
            err.to_string(),
            "failed to build Configuration screen: out of widgets"
        );
        assert_eq!(err.kind(), ScreenKind::Config);
    }
}
