mod app_state;
mod modal;
mod settings;

// Re-export all types from submodules
pub use app_state::*;
pub use modal::*;
pub use settings::*;
