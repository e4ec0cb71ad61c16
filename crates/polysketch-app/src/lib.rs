//! PolySketch Application
//!
//! The application shell: window and GPU surface, pointer and keyboard
//! input, and the egui control panel driving the canvas.

mod app;
mod shortcuts;
mod ui;

pub use app::{App, AppConfig, AppError};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
pub use ui::{UiAction, UiState, render_ui};
