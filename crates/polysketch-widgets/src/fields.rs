//! Labelled numeric text fields.

use egui::{CornerRadius, Response, Stroke, TextEdit, Ui};

use crate::{sizing, theme};

/// Parse whitespace separated finite numbers. `None` if any token is not one.
pub fn numbers_in(text: &str) -> Option<Vec<f64>> {
    text.split_whitespace()
        .map(|token| token.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// A single-line text field expecting `arity` numbers.
///
/// Content that would not parse gets a red outline; empty content is neutral.
pub struct NumericField<'a> {
    label: &'a str,
    text: &'a mut String,
    arity: usize,
    hint: Option<&'a str>,
    width: f32,
}

impl<'a> NumericField<'a> {
    /// Field for a single number.
    pub fn new(label: &'a str, text: &'a mut String) -> Self {
        Self {
            label,
            text,
            arity: 1,
            hint: None,
            width: sizing::FIELD_WIDTH,
        }
    }

    /// Field for a whitespace separated pair, e.g. `"2 0.5"`.
    pub fn pair(label: &'a str, text: &'a mut String) -> Self {
        Self {
            arity: 2,
            width: sizing::PAIR_FIELD_WIDTH,
            ..Self::new(label, text)
        }
    }

    /// Placeholder shown while empty.
    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }

    /// Whether the current content would be accepted.
    pub fn is_valid(&self) -> bool {
        field_state(self.text, self.arity) != FieldState::Invalid
    }

    /// Show the label and field side by side.
    pub fn show(self, ui: &mut Ui) -> Response {
        let invalid = !self.is_valid();
        ui.horizontal(|ui| {
            if !self.label.is_empty() {
                ui.label(egui::RichText::new(self.label).size(11.0).color(theme::TEXT));
            }
            let mut edit = TextEdit::singleline(self.text).desired_width(self.width);
            if let Some(hint) = self.hint {
                edit = edit.hint_text(hint);
            }
            let response = ui.add(edit);
            if invalid {
                ui.painter().rect_stroke(
                    response.rect.expand(1.0),
                    CornerRadius::same(sizing::CORNER_RADIUS),
                    Stroke::new(1.0, theme::ERROR),
                    egui::StrokeKind::Outside,
                );
            }
            response
        })
        .inner
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    Empty,
    Valid,
    Invalid,
}

fn field_state(text: &str, arity: usize) -> FieldState {
    if text.trim().is_empty() {
        return FieldState::Empty;
    }
    match numbers_in(text) {
        Some(values) if values.len() == arity => FieldState::Valid,
        _ => FieldState::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_in() {
        assert_eq!(numbers_in("1 2.5"), Some(vec![1.0, 2.5]));
        assert_eq!(numbers_in("  -3 "), Some(vec![-3.0]));
        assert_eq!(numbers_in(""), Some(vec![]));
        assert_eq!(numbers_in("1 x"), None);
        assert_eq!(numbers_in("inf"), None);
    }

    #[test]
    fn test_field_state() {
        assert_eq!(field_state("", 1), FieldState::Empty);
        assert_eq!(field_state("   ", 2), FieldState::Empty);
        assert_eq!(field_state("45", 1), FieldState::Valid);
        assert_eq!(field_state("2 3", 2), FieldState::Valid);
        assert_eq!(field_state("2", 2), FieldState::Invalid);
        assert_eq!(field_state("abc", 1), FieldState::Invalid);
    }

    #[test]
    fn test_is_valid() {
        let mut text = String::from("1 2 3");
        assert!(!NumericField::pair("scale", &mut text).is_valid());
        let mut text = String::from("12");
        assert!(NumericField::new("x", &mut text).is_valid());
    }
}
