//! Canvas document and interaction state.

use crate::command::Command;
use crate::curve::{BezierCurve, control_point_hit_box};
use crate::geometry::drag_angle;
use crate::input::PointerEvent;
use crate::selection::{DragState, DragTarget};
use crate::shapes::{Polygon, ShapeId, ShapeTrait};
use crate::tools::{CanvasMode, ModeManager};
use kurbo::{Point, Vec2};

/// The polygons on the canvas, in creation (and drawing) order.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    polygons: Vec<Polygon>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty polygon and return its id.
    pub fn create_polygon(&mut self) -> ShapeId {
        let polygon = Polygon::new();
        let id = polygon.id();
        self.polygons.push(polygon);
        id
    }

    /// Append a vertex to a polygon. Returns false for an unknown id.
    pub fn add_vertex(&mut self, id: ShapeId, point: Point) -> bool {
        match self.get_polygon_mut(id) {
            Some(polygon) => {
                polygon.add_vertex(point);
                true
            }
            None => false,
        }
    }

    pub fn get_polygon(&self, id: ShapeId) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id() == id)
    }

    pub fn get_polygon_mut(&mut self, id: ShapeId) -> Option<&mut Polygon> {
        self.polygons.iter_mut().find(|p| p.id() == id)
    }

    /// Polygons in creation order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// First polygon (in creation order) containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<ShapeId> {
        self.polygons
            .iter()
            .find(|p| p.hit_test(point))
            .map(|p| p.id())
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }
}

/// The full editable state: polygons, the Bézier curve, anchor, selection and mode.
///
/// All mutation goes through [`Canvas::handle_pointer`] and [`Canvas::apply_command`].
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    document: CanvasDocument,
    curve: BezierCurve,
    modes: ModeManager,
    anchor: Option<Point>,
    selected_shape: Option<ShapeId>,
    selected_control_point: Option<usize>,
    drag: DragState,
}

impl Canvas {
    /// Create a new empty canvas in polygon creation mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CanvasMode {
        self.modes.current_mode
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn selected_shape(&self) -> Option<ShapeId> {
        self.selected_shape
    }

    pub fn selected_polygon(&self) -> Option<&Polygon> {
        self.selected_shape
            .and_then(|id| self.document.get_polygon(id))
    }

    pub fn selected_control_point(&self) -> Option<usize> {
        self.selected_control_point
    }

    pub fn control_points(&self) -> &[Point] {
        self.curve.points()
    }

    pub fn curve(&self) -> &BezierCurve {
        &self.curve
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    /// Polygon currently being extended by clicks, if any.
    pub fn pending_polygon(&self) -> Option<ShapeId> {
        self.modes.pending_polygon()
    }

    pub fn drag_target(&self) -> Option<DragTarget> {
        self.drag.target
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Position of the selected control point.
    pub fn selected_control_point_position(&self) -> Option<Point> {
        self.selected_control_point
            .and_then(|i| self.curve.get(i))
    }

    /// Switch mode, keeping shapes and points but closing the in-progress polygon.
    pub fn set_mode(&mut self, mode: CanvasMode) {
        self.modes.set_mode(mode);
    }

    /// Apply one pointer gesture.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Click(p) => self.click(p),
            PointerEvent::Press(p) => self.press(p),
            PointerEvent::Drag(p) => self.drag_to(p),
            PointerEvent::Release(_) => self.drag.end(),
        }
    }

    fn click(&mut self, p: Point) {
        match self.modes.current_mode {
            CanvasMode::Bezier => {
                if self.selected_control_point.is_some() {
                    self.selected_control_point = None;
                } else if let Some(index) = self.curve.hit_test(p) {
                    self.selected_control_point = Some(index);
                } else {
                    self.curve.push(p);
                }
            }
            CanvasMode::TransformPolygon => {
                // A click on any polygon toggles: it selects when nothing is
                // selected and deselects otherwise, whichever polygon was hit.
                self.selected_shape = match self.document.hit_test(p) {
                    Some(hit) if self.selected_shape.is_none() => Some(hit),
                    _ => None,
                };
            }
            CanvasMode::CreatePolygon => self.append_vertex(p),
            CanvasMode::AddAnchor => self.anchor = Some(p),
            CanvasMode::MouseRotate => {}
        }
    }

    fn press(&mut self, p: Point) {
        let on_control_point = self
            .selected_control_point_position()
            .is_some_and(|cp| control_point_hit_box(cp).contains(p));
        if on_control_point {
            self.drag.begin(DragTarget::ControlPoint, None);
        } else if self.selected_shape.is_some() {
            let reference = self.anchor.map(|anchor| drag_angle(anchor, p));
            self.drag.begin(DragTarget::Selection, reference);
        }
    }

    fn drag_to(&mut self, p: Point) {
        let mode = self.modes.current_mode;
        if mode == CanvasMode::Bezier && self.drag.is_active() {
            if let Some(index) = self.selected_control_point {
                self.curve.set(index, p);
            }
        } else if mode == CanvasMode::TransformPolygon && self.drag.is_active() {
            let moved = self
                .selected_polygon_mut()
                .is_some_and(|polygon| polygon.move_first_vertex_to(p));
            if !moved {
                log::debug!("drag ignored: no selected polygon with vertices");
            }
        } else if let Some(anchor) = self.anchor {
            let delta = self.drag.rotate_to(drag_angle(anchor, p));
            if delta != 0.0 {
                self.rotate_selected(delta);
            }
        }
    }

    /// Apply an explicit command.
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Move { dx, dy } => self.move_selected(Vec2::new(dx, dy)),
            Command::Rotate { degrees } => self.rotate_selected(degrees),
            Command::Scale { sx, sy } => self.scale_selected(sx, sy),
            Command::FinishPolygon => {
                self.modes.finish_polygon();
            }
            Command::AddVertex { x, y } => self.append_vertex(Point::new(x, y)),
            Command::SetMode(mode) => self.set_mode(mode),
            Command::Clear => self.clear(),
        }
    }

    /// Translate the selected polygon and the selected control point.
    pub fn move_selected(&mut self, delta: Vec2) {
        let mut moved = false;
        if let Some(polygon) = self.selected_polygon_mut() {
            polygon.translate(delta);
            moved = true;
        }
        if let Some(index) = self.selected_control_point {
            moved |= self.curve.translate(index, delta);
        }
        if !moved {
            log::debug!("move ignored: nothing selected");
        }
    }

    /// Rotate the selected polygon about the anchor.
    pub fn rotate_selected(&mut self, degrees: f64) {
        let Some(anchor) = self.anchor else {
            log::debug!("rotate ignored: no anchor");
            return;
        };
        match self.selected_polygon_mut() {
            Some(polygon) => polygon.rotate_about(degrees, anchor),
            None => log::debug!("rotate ignored: no selection"),
        }
    }

    /// Scale the selected polygon about the anchor.
    pub fn scale_selected(&mut self, sx: f64, sy: f64) {
        let Some(anchor) = self.anchor else {
            log::debug!("scale ignored: no anchor");
            return;
        };
        match self.selected_polygon_mut() {
            Some(polygon) => polygon.scale_about(sx, sy, anchor),
            None => log::debug!("scale ignored: no selection"),
        }
    }

    /// Remove every polygon and control point, and reset anchor, selection and drag.
    ///
    /// The current mode is kept.
    pub fn clear(&mut self) {
        self.document.clear();
        self.curve.clear();
        self.anchor = None;
        self.selected_shape = None;
        self.selected_control_point = None;
        self.drag.end();
        self.modes.finish_polygon();
    }

    /// Append to the selected polygon, else to the in-progress one (created on demand).
    fn append_vertex(&mut self, p: Point) {
        let target = self.selected_shape.or(self.modes.pending_polygon());
        if target.is_some_and(|id| self.document.add_vertex(id, p)) {
            return;
        }
        let id = self.document.create_polygon();
        self.modes.begin_polygon(id);
        self.document.add_vertex(id, p);
    }

    fn selected_polygon_mut(&mut self) -> Option<&mut Polygon> {
        let id = self.selected_shape?;
        self.document.get_polygon_mut(id)
    }
}
