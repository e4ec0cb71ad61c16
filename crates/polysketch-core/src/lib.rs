//! PolySketch Core Library
//!
//! Platform-agnostic geometry, shape model and interaction state for the PolySketch canvas.

pub mod canvas;
pub mod command;
pub mod curve;
pub mod geometry;
pub mod input;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::{Canvas, CanvasDocument};
pub use command::{Command, CommandError, parse_move, parse_point, parse_rotate, parse_scale};
pub use curve::{BezierCurve, BezierSamples, DEFAULT_CURVE_STEPS};
pub use input::{CLICK_SLOP, MouseButton, PointerEvent, PointerTracker, RawPointerEvent};
pub use selection::{DragState, DragTarget};
pub use shapes::{Polygon, ShapeId, ShapeStyle, ShapeTrait};
pub use tools::{CanvasMode, ModeManager};
