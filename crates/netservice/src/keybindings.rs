//! Keybindings matching utilities.
//!
//! Provides functions to convert an AppKeyEvent to its string representation,
//! to check if a key event matches configured bindings, and to load and save
//! the bindings file.

use std::path::Path;

use crate::data::keybindings_data::KeybindingsConfig;
use crate::data::storage::{DataDirectory, StorageError};
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// Convert an AppKeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('c') with ctrl -> "ctrl+c"
    /// - KeyCode::Char('J') with shift -> "shift+j"
    /// - KeyCode::Enter -> "enter"
    /// - KeyCode::BackTab -> "shift+tab"
    pub fn app_key_to_string(key: &AppKeyEvent) -> String {
        let mut parts = Vec::new();

        if key.ctrl {
            parts.push("ctrl");
        }
        if key.alt {
            parts.push("alt");
        }

        let key_str = match &key.code {
            KeyCode::Char(c) => {
                if key.shift && (c.is_uppercase() || !c.is_alphabetic()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => {
                if key.shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::BackTab => {
                if !parts.contains(&"shift") {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if key.shift {
                    parts.push("shift");
                }
                match key.code {
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    _ => "right",
                }
                .to_string()
            }
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(), // Unsupported key
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if an AppKeyEvent matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::app_key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// First binding of a list, for help text.
    pub fn display(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("?")
    }

    /// Get the keybindings file path
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        DataDirectory::new(data_dir.to_path_buf()).keybindings_path()
    }

    /// Load keybindings from file, returning defaults if the file doesn't exist
    /// or fails to parse.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read keybindings, using defaults"
                );
                return Self::default();
            }
        };

        match serde_saphyr::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Failed to parse keybindings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Save keybindings to file.
    pub fn save(&self, data_dir: &Path) -> Result<(), StorageError> {
        let path = Self::path(data_dir);
        let yaml = serde_saphyr::to_string(self).map_err(|e| {
            StorageError::Serialize(format!("Failed to serialize keybindings: {}", e))
        })?;

        std::fs::write(path, yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write keybindings: {}", e)))
    }
}
