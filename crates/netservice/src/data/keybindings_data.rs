//! Keybindings configuration data structures.
//!
//! Defines the structure for customizable keyboard shortcuts that can be
//! serialized to/from `~/.netservice/keybindings.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work on every screen)
    pub global: GlobalBindings,
    /// Function screen keybindings
    pub function: FunctionBindings,
    /// Configuration screen keybindings
    pub config: ConfigBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["ctrl+c".into()],
        }
    }
}

/// Keybindings for the function screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionBindings {
    pub open_config: Vec<String>,
    pub back: Vec<String>,
}

impl Default for FunctionBindings {
    fn default() -> Self {
        Self {
            open_config: vec!["c".into(), "enter".into()],
            back: vec!["q".into(), "esc".into(), "backspace".into()],
        }
    }
}

/// Keybindings for the configuration screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBindings {
    pub back: Vec<String>,
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub prev_option: Vec<String>,
    pub next_option: Vec<String>,
}

impl Default for ConfigBindings {
    fn default() -> Self {
        Self {
            back: vec!["esc".into(), "backspace".into(), "q".into()],
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            prev_option: vec!["h".into(), "left".into()],
            next_option: vec!["l".into(), "right".into(), "enter".into()],
        }
    }
}
