//! Layout helpers: separators, section labels, status line.

use egui::{Color32, Stroke, Ui};

use crate::theme;

/// Draw a horizontal separator line.
pub fn separator(ui: &mut Ui) {
    let rect = ui.available_rect_before_wrap();
    let y = rect.top() + 4.0;
    ui.painter().line_segment(
        [
            egui::Pos2::new(rect.left(), y),
            egui::Pos2::new(rect.right(), y),
        ],
        Stroke::new(1.0, Color32::from_gray(230)),
    );
    ui.add_space(8.0);
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}

/// One line of feedback under the controls. Errors are drawn in red.
pub fn status_line(ui: &mut Ui, text: &str, is_error: bool) {
    let color = if is_error { theme::ERROR } else { theme::TEXT_MUTED };
    ui.label(egui::RichText::new(text).size(11.0).color(color));
}
