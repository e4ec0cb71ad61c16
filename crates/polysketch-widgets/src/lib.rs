//! Reusable egui widget components for the PolySketch control panel.
//!
//! - **Buttons**: mode toggle buttons, action buttons
//! - **Fields**: labelled numeric text fields with inline validation
//! - **Menu**: panel frames
//! - **Layout**: section labels, separators, status line

pub mod buttons;
pub mod fields;
pub mod layout;
pub mod menu;

pub use buttons::{ActionButton, ToggleButton};
pub use fields::{NumericField, numbers_in};
pub use layout::{section_label, separator, status_line};
pub use menu::panel_frame;

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Standard button height
    pub const BUTTON_HEIGHT: f32 = 24.0;
    /// Width of a single-number field
    pub const FIELD_WIDTH: f32 = 56.0;
    /// Width of a two-number field
    pub const PAIR_FIELD_WIDTH: f32 = 84.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Panel corner radius
    pub const PANEL_RADIUS: u8 = 8;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Invalid input border
    pub const ERROR: Color32 = Color32::from_rgb(220, 38, 38);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(235, 235, 235);
    /// Idle button background
    pub const BUTTON_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
}
