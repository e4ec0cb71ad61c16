//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, Renderer, ShapeRenderer};
use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape as KurboShape, Stroke};
use peniko::{Color, Fill};
use polysketch_core::curve::control_point_hit_box;
use polysketch_core::shapes::{Polygon, ShapeTrait};
use vello::Scene;

/// Diameter of a drawn control point.
const CONTROL_POINT_DIAMETER: f64 = 6.0;
/// Diameter of the anchor marker.
const ANCHOR_DIAMETER: f64 = 10.0;
/// Side of a curve sample dot.
const CURVE_DOT_SIZE: f64 = 1.0;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Color of polygon outlines, control points and the curve.
    ink_color: Color,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            ink_color: Color::BLACK,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

/// Dot drawn for a control point, centred on it like its hit box.
fn control_point_dot(p: Point) -> Circle {
    Circle::new(p, CONTROL_POINT_DIAMETER / 2.0)
}

impl ShapeRenderer for VelloRenderer {
    fn render_polygon(&mut self, polygon: &Polygon, transform: Affine, color: Color) {
        if polygon.is_empty() {
            return;
        }
        let path = polygon.to_path();
        let stroke = Stroke::new(polygon.style().stroke_width);
        self.scene.stroke(&stroke, transform, color, None, &path);
    }

    fn render_control_points(&mut self, points: &[Point], selected: Option<usize>, transform: Affine) {
        for &p in points {
            let dot = control_point_dot(p);
            self.scene.fill(Fill::NonZero, transform, self.ink_color, None, &dot);
        }
        if let Some(&p) = selected.and_then(|i| points.get(i)) {
            let rect = control_point_hit_box(p);
            self.scene
                .stroke(&Stroke::new(1.0), transform, self.ink_color, None, &rect);
        }
    }

    fn render_curve_samples(&mut self, samples: &mut dyn Iterator<Item = Point>, transform: Affine) {
        // One path with a tiny square per sample keeps this to a single fill.
        let mut path = BezPath::new();
        for p in samples {
            let dot = Rect::from_origin_size(p, (CURVE_DOT_SIZE, CURVE_DOT_SIZE));
            path.extend(dot.path_elements(0.1));
        }
        if path.elements().is_empty() {
            return;
        }
        self.scene.fill(Fill::NonZero, transform, self.ink_color, None, &path);
    }

    fn render_anchor(&mut self, anchor: Point, transform: Affine, color: Color) {
        let disc = Circle::new(anchor, ANCHOR_DIAMETER / 2.0);
        self.scene.fill(Fill::NonZero, transform, color, None, &disc);
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.scene.reset();
        let transform = ctx.transform();
        let canvas = ctx.canvas;

        let curve = canvas.curve();
        self.render_control_points(curve.points(), canvas.selected_control_point(), transform);
        self.render_curve_samples(&mut curve.samples(ctx.curve_steps), transform);

        for polygon in canvas.document().polygons() {
            let color = polygon.style().stroke();
            self.render_polygon(polygon, transform, color);
        }

        // Redraw the selection on top so it is not hidden by later outlines.
        if let Some(selected) = canvas.selected_polygon() {
            self.render_polygon(selected, transform, ctx.selection_color);
        }

        if let Some(anchor) = canvas.anchor() {
            self.render_anchor(anchor, transform, ctx.anchor_color);
        }
    }
}
