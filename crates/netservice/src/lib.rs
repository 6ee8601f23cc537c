//! Terminal front end for the network service console
//!
//! Presents the function screen from `netservice_core`, draws whichever screen
//! of the chain is visible, routes key presses to it, and decides what to do
//! when the function screen reports that it was closed.

pub mod app;
pub mod components;
pub mod data;
pub mod event;
pub mod keybindings;
pub mod logging;
pub mod modals;
pub mod screens;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
