//! UI components using egui.

use egui::{Align2, Context, Response, Vec2};
use kurbo::Point;
use polysketch_core::{
    CanvasMode, Command, CommandError, parse_move, parse_point, parse_rotate, parse_scale,
};
use polysketch_widgets::{
    ActionButton, NumericField, ToggleButton, panel_frame, section_label, separator, status_line,
};

use crate::shortcuts::ShortcutRegistry;

/// Width shared by the mode toggles so they line up in a column.
const MODE_BUTTON_WIDTH: f32 = 132.0;

/// UI state and actions.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active mode (mirrored from canvas).
    pub current_mode: CanvasMode,
    /// Whether a polygon is still taking vertices (mirrored from canvas).
    pub has_pending_polygon: bool,
    /// Move offset, or the new position of the selected control point.
    pub x: String,
    pub y: String,
    /// Rotation angle in degrees.
    pub angle: String,
    /// Scale factors, "sx sy".
    pub scale: String,
    /// Vertex to append, "x y".
    pub point: String,
    /// Last command feedback, if any.
    pub status: Option<String>,
    pub status_is_error: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the command a panel action stands for from the current field text.
    pub fn command_for(&self, action: &UiAction) -> Result<Command, CommandError> {
        Ok(match action {
            UiAction::Move => parse_move(&self.x, &self.y)?,
            UiAction::Rotate => parse_rotate(&self.angle)?,
            UiAction::Scale => parse_scale(&self.scale)?,
            UiAction::AddPoint => parse_point(&self.point)?,
            UiAction::FinishPolygon => Command::FinishPolygon,
            UiAction::Clear => Command::Clear,
            UiAction::SetMode(mode) => Command::SetMode(*mode),
        })
    }

    /// Fill the x / y fields with a control point position, or empty them.
    pub fn prefill_position(&mut self, position: Option<Point>) {
        match position {
            Some(p) => {
                self.x = format_coordinate(p.x);
                self.y = format_coordinate(p.y);
            }
            None => {
                self.x.clear();
                self.y.clear();
            }
        }
    }

    /// React to a mode being picked, even when it is already active.
    ///
    /// Choosing Bezier refreshes the x / y fields from the selected control point.
    pub fn mode_chosen(&mut self, mode: CanvasMode, selected_point: Option<Point>) {
        if mode == CanvasMode::Bezier {
            self.prefill_position(selected_point);
        }
    }

    /// Show an error in the status line.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_is_error = true;
    }

    /// Show a neutral message in the status line.
    pub fn report(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.status_is_error = false;
    }
}

/// Shortest text for a coordinate: integers without a fractional part.
fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Actions that can be triggered by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Switch the canvas mode.
    SetMode(CanvasMode),
    /// Translate the selection by the x / y fields.
    Move,
    /// Rotate the selection about the anchor by the angle field.
    Rotate,
    /// Scale the selection about the anchor by the scale field.
    Scale,
    /// Append the point field as a polygon vertex.
    AddPoint,
    FinishPolygon,
    Clear,
}

/// Render all UI panels and return the triggered action, if any.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mode_action = render_mode_toolbar(ctx, ui_state);
    let command_action = render_command_panel(ctx, ui_state);
    mode_action.or(command_action)
}

/// Render the mode toggles along the top left.
fn render_mode_toolbar(ctx: &Context, ui_state: &UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("mode_toolbar"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(0.0, 2.0);
                    section_label(ui, "Mode");
                    for mode in CanvasMode::ALL {
                        let mut button = ToggleButton::new(mode.label(), ui_state.current_mode == mode)
                            .min_width(MODE_BUTTON_WIDTH);
                        if let Some(key) = ShortcutRegistry::key_for_mode(mode) {
                            button = button.shortcut(key);
                        }
                        if button.show(ui) {
                            action = Some(UiAction::SetMode(mode));
                        }
                    }
                });
            });
        });

    action
}

/// Render the numeric command fields and buttons along the top right.
fn render_command_panel(ctx: &Context, ui_state: &mut UiState) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("command_panel"))
        .anchor(Align2::RIGHT_TOP, Vec2::new(-12.0, 12.0))
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.spacing_mut().item_spacing = Vec2::new(4.0, 4.0);

                    section_label(ui, "Move");
                    ui.horizontal(|ui| {
                        let x = NumericField::new("x", &mut ui_state.x).show(ui);
                        let y = NumericField::new("y", &mut ui_state.y).show(ui);
                        if ActionButton::new("Move").show(ui) || submitted(ui, &x) || submitted(ui, &y) {
                            action = Some(UiAction::Move);
                        }
                    });

                    section_label(ui, "Rotate about anchor");
                    ui.horizontal(|ui| {
                        let angle = NumericField::new("deg", &mut ui_state.angle)
                            .hint("90")
                            .show(ui);
                        if ActionButton::new("Rotate").show(ui) || submitted(ui, &angle) {
                            action = Some(UiAction::Rotate);
                        }
                    });

                    section_label(ui, "Scale about anchor");
                    ui.horizontal(|ui| {
                        let scale = NumericField::pair("sx sy", &mut ui_state.scale)
                            .hint("2 0.5")
                            .show(ui);
                        if ActionButton::new("Scale").show(ui) || submitted(ui, &scale) {
                            action = Some(UiAction::Scale);
                        }
                    });

                    separator(ui);

                    section_label(ui, "Polygon");
                    ui.horizontal(|ui| {
                        let point = NumericField::pair("x y", &mut ui_state.point)
                            .hint("10 20")
                            .show(ui);
                        if ActionButton::new("Add point").show(ui) || submitted(ui, &point) {
                            action = Some(UiAction::AddPoint);
                        }
                    });
                    ui.horizontal(|ui| {
                        if ActionButton::new("Finish polygon")
                            .shortcut("Enter")
                            .enabled(ui_state.has_pending_polygon)
                            .show(ui)
                        {
                            action = Some(UiAction::FinishPolygon);
                        }
                        if ActionButton::new("Clear").show(ui) {
                            action = Some(UiAction::Clear);
                        }
                    });

                    if let Some(status) = &ui_state.status {
                        separator(ui);
                        status_line(ui, status, ui_state.status_is_error);
                    }
                });
            });
        });

    action
}

/// Whether Enter was pressed to leave `response`'s field.
fn submitted(ui: &egui::Ui, response: &Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
