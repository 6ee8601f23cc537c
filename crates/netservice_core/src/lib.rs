//! Screen navigation controller for the network service console
//!
//! This crate decides when screens are constructed, how visibility moves
//! between the entry screen and its configuration screen, and how a close
//! request is reported to whoever presented the entry screen.
//! It supports:
//! - A `Screen` capability (show/hide) shared by both screens
//! - Lazy, construct-once ownership of the configuration screen
//! - Hide-before-show sequencing so two screens are never visible together
//! - A parameterless `closed` notification delivered to the presenter
//!
//! Layout is opaque here: each screen is backed by a [`ScreenUi`] that an
//! injected [`UiBuilder`] produces when the screen is constructed.
//!
//! ```ignore
//! use netservice_core::{FunctionScreen, Screen};
//!
//! let mut screen = FunctionScreen::new(builder, || println!("closed"))?;
//! screen.show();
//! screen.on_open_config()?;
//! screen.on_config_back();
//! screen.on_back();
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config_screen;
pub mod error;
pub mod function_screen;
pub mod nav;
pub mod screen;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config_screen::ConfigScreen;
pub use error::ScreenError;
pub use function_screen::{ClosedHandler, FunctionScreen};
pub use nav::NavState;
pub use screen::{Screen, ScreenKind, ScreenUi, UiBuilder, Visibility};
