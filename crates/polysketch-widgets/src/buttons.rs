//! Button components: mode toggles and action buttons.

use egui::{Align2, Color32, CornerRadius, CursorIcon, FontId, Response, Sense, Ui, vec2};

use crate::{sizing, theme};

/// Width of a button that fits `label` at `font_size`, plus padding.
fn fitted_width(ui: &Ui, label: &str, font_size: f32, min_width: Option<f32>) -> f32 {
    let galley = ui.painter().layout_no_wrap(
        label.to_string(),
        FontId::proportional(font_size),
        Color32::PLACEHOLDER,
    );
    let text_width = galley.size().x + 16.0;
    min_width.unwrap_or(text_width).max(text_width)
}

/// Attach a tooltip naming the shortcut, if any.
fn with_shortcut_hint(response: Response, shortcut: Option<&str>) -> Response {
    match shortcut {
        Some(shortcut) => response.on_hover_text(format!("Shortcut: {shortcut}")),
        None => response,
    }
}

/// A toggle button with text label.
/// Uses solid blue background when selected.
pub struct ToggleButton<'a> {
    label: &'a str,
    selected: bool,
    shortcut: Option<&'a str>,
    min_width: Option<f32>,
    font_size: f32,
}

impl<'a> ToggleButton<'a> {
    /// Create a new toggle button.
    pub fn new(label: &'a str, selected: bool) -> Self {
        Self {
            label,
            selected,
            shortcut: None,
            min_width: None,
            font_size: 11.0,
        }
    }

    /// Set minimum width.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Set keyboard shortcut (shown in hover tooltip).
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let width = fitted_width(ui, self.label, self.font_size, self.min_width);
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, sizing::BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                theme::ACCENT
            } else if response.hovered() {
                theme::HOVER_BG
            } else {
                theme::BUTTON_BG
            };
            let text_color = if self.selected {
                Color32::WHITE
            } else {
                Color32::from_gray(80)
            };

            ui.painter()
                .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg_color);
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(self.font_size),
                text_color,
            );
        }

        let response = with_shortcut_hint(response, self.shortcut);
        let clicked = response.clicked();
        response.on_hover_cursor(CursorIcon::PointingHand);
        clicked
    }
}

/// A bordered push button for one-shot commands.
pub struct ActionButton<'a> {
    label: &'a str,
    shortcut: Option<&'a str>,
    enabled: bool,
}

impl<'a> ActionButton<'a> {
    /// Create a new action button.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            shortcut: None,
            enabled: true,
        }
    }

    /// Add a shortcut hint.
    pub fn shortcut(mut self, shortcut: &'a str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    /// Grey the button out and ignore clicks when false.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Show the button and return true if clicked.
    pub fn show(self, ui: &mut Ui) -> bool {
        let width = fitted_width(ui, self.label, 12.0, None);
        let (rect, response) =
            ui.allocate_exact_size(vec2(width, sizing::BUTTON_HEIGHT), Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.enabled && response.hovered() {
                theme::HOVER_BG
            } else {
                theme::BUTTON_BG
            };
            let text_color = if self.enabled {
                theme::TEXT
            } else {
                Color32::from_gray(180)
            };

            let radius = CornerRadius::same(sizing::CORNER_RADIUS);
            ui.painter().rect_filled(rect, radius, bg_color);
            ui.painter().rect_stroke(
                rect,
                radius,
                egui::Stroke::new(1.0, theme::BORDER),
                egui::StrokeKind::Inside,
            );
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                self.label,
                FontId::proportional(12.0),
                text_color,
            );
        }

        let response = with_shortcut_hint(response, self.shortcut);
        let clicked = response.clicked();
        if self.enabled {
            response.on_hover_cursor(CursorIcon::PointingHand);
        }
        self.enabled && clicked
    }
}
