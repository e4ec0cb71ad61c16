//! Pointer input: raw window events in, canvas gestures out.

use kurbo::Point;

/// Maximum travel between press and release that still counts as a click.
pub const CLICK_SLOP: f64 = 3.0;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Raw pointer event as delivered by the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawPointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

/// Gesture-level pointer event consumed by [`Canvas::handle_pointer`](crate::Canvas::handle_pointer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press and release at (nearly) the same spot.
    Click(Point),
    Press(Point),
    /// Pointer moved while the button is held.
    Drag(Point),
    Release(Point),
}

/// Turns raw button/motion events into press, drag, release and click gestures.
///
/// Only the left button drives gestures. A release that stays within
/// [`CLICK_SLOP`] of its press is followed by a `Click`.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Current pointer position.
    pub pointer_position: Point,
    /// Where the active press started.
    press_origin: Option<Point>,
    /// Furthest distance travelled from the press origin.
    max_travel: f64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the left button is currently held.
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    /// Feed one raw event, returning the gestures it produces in order.
    pub fn handle(&mut self, event: RawPointerEvent) -> Vec<PointerEvent> {
        match event {
            RawPointerEvent::Down {
                position,
                button: MouseButton::Left,
            } => {
                self.pointer_position = position;
                self.press_origin = Some(position);
                self.max_travel = 0.0;
                vec![PointerEvent::Press(position)]
            }
            RawPointerEvent::Up {
                position,
                button: MouseButton::Left,
            } => {
                self.pointer_position = position;
                let Some(origin) = self.press_origin.take() else {
                    return Vec::new();
                };
                let travel = self.max_travel.max(origin.distance(position));
                let mut out = vec![PointerEvent::Release(position)];
                if travel <= CLICK_SLOP {
                    out.push(PointerEvent::Click(position));
                }
                out
            }
            RawPointerEvent::Down { .. } | RawPointerEvent::Up { .. } => Vec::new(),
            RawPointerEvent::Move { position } => {
                self.pointer_position = position;
                match self.press_origin {
                    Some(origin) => {
                        self.max_travel = self.max_travel.max(origin.distance(position));
                        vec![PointerEvent::Drag(position)]
                    }
                    None => Vec::new(),
                }
            }
        }
    }

    /// Drop any active press without emitting a release.
    pub fn cancel(&mut self) {
        self.press_origin = None;
        self.max_travel = 0.0;
    }
}
