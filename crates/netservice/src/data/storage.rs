//! Data directory layout (no configuration values are persisted)
//!
//! Directory structure:
//! ~/.netservice/
//!   keybindings.yaml     # Customizable key bindings
//!   netservice.log       # Application log

use std::fs;
use std::path::PathBuf;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// The application's data directory.
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|e| {
            StorageError::Io(format!(
                "Failed to create data directory {:?}: {}",
                self.root, e
            ))
        })
    }

    pub fn keybindings_path(&self) -> PathBuf {
        self.root.join("keybindings.yaml")
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("netservice.log")
    }
}
