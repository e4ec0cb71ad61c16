//! Renderer trait abstraction.

use kurbo::{Affine, Point};
use peniko::Color;
use polysketch_core::canvas::Canvas;
use polysketch_core::curve::DEFAULT_CURVE_STEPS;
use polysketch_core::shapes::Polygon;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Initialization failed: {0}")]
    InitFailed(String),
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Outline color of the selected polygon.
    pub selection_color: Color,
    /// Color of the anchor marker.
    pub anchor_color: Color,
    /// Parameter steps used to sample the Bézier curve.
    pub curve_steps: usize,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas) -> Self {
        Self {
            canvas,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(192, 192, 192, 255),
            selection_color: Color::from_rgba8(255, 0, 0, 255),
            anchor_color: Color::from_rgba8(255, 0, 255, 255),
            curve_steps: DEFAULT_CURVE_STEPS,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection highlight color.
    pub fn with_selection_color(mut self, color: Color) -> Self {
        self.selection_color = color;
        self
    }

    /// Set the number of curve sampling steps.
    pub fn with_curve_steps(mut self, steps: usize) -> Self {
        self.curve_steps = steps;
        self
    }

    /// Transform from canvas coordinates to physical pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

/// Per-element drawing used by renderers while building a frame.
pub trait ShapeRenderer {
    /// Render a polygon outline.
    fn render_polygon(&mut self, polygon: &Polygon, transform: Affine, color: Color);

    /// Render Bézier control points, boxing the selected one.
    fn render_control_points(&mut self, points: &[Point], selected: Option<usize>, transform: Affine);

    /// Render sampled curve points as single-pixel dots.
    fn render_curve_samples(&mut self, samples: &mut dyn Iterator<Item = Point>, transform: Affine);

    /// Render the anchor marker.
    fn render_anchor(&mut self, anchor: Point, transform: Affine, color: Color);
}
