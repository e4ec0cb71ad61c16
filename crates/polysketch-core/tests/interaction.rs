//! End-to-end interaction sequences: raw pointer events through the tracker into the canvas.

use kurbo::Point;
use polysketch_core::{
    Canvas, CanvasMode, Command, DEFAULT_CURVE_STEPS, MouseButton, PointerTracker,
    RawPointerEvent, ShapeTrait, parse_point, parse_rotate, parse_scale,
};

const EPS: f64 = 1e-9;

struct Session {
    canvas: Canvas,
    tracker: PointerTracker,
}

impl Session {
    fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            tracker: PointerTracker::new(),
        }
    }

    fn feed(&mut self, event: RawPointerEvent) {
        for gesture in self.tracker.handle(event) {
            self.canvas.handle_pointer(gesture);
        }
    }

    fn click(&mut self, x: f64, y: f64) {
        let position = Point::new(x, y);
        self.feed(RawPointerEvent::Down {
            position,
            button: MouseButton::Left,
        });
        self.feed(RawPointerEvent::Up {
            position,
            button: MouseButton::Left,
        });
    }

    fn drag(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.feed(RawPointerEvent::Down {
            position: from.into(),
            button: MouseButton::Left,
        });
        // Two steps so the intermediate position is visited.
        let mid = Point::new((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
        self.feed(RawPointerEvent::Move { position: mid });
        self.feed(RawPointerEvent::Move {
            position: to.into(),
        });
        self.feed(RawPointerEvent::Up {
            position: to.into(),
            button: MouseButton::Left,
        });
    }

    fn mode(&mut self, mode: CanvasMode) {
        self.canvas.apply_command(Command::SetMode(mode));
    }
}

fn assert_close(a: Point, b: Point) {
    assert!(
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS,
        "{a:?} != {b:?}"
    );
}

#[test]
fn draw_select_and_rotate_square() {
    let mut s = Session::new();
    for (x, y) in [(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)] {
        s.click(x, y);
    }
    s.canvas.apply_command(Command::FinishPolygon);

    s.mode(CanvasMode::AddAnchor);
    s.click(15.0, 15.0);
    s.mode(CanvasMode::TransformPolygon);
    s.click(15.0, 15.0);
    assert!(s.canvas.selected_shape().is_some());

    s.canvas.apply_command(parse_rotate("90").unwrap());
    let vertices = s.canvas.selected_polygon().unwrap().vertices().to_vec();
    assert_close(vertices[0], Point::new(20.0, 10.0));
    assert_close(vertices[1], Point::new(20.0, 20.0));
    assert_close(vertices[2], Point::new(10.0, 20.0));
    assert_close(vertices[3], Point::new(10.0, 10.0));
}

#[test]
fn drag_selected_polygon() {
    let mut s = Session::new();
    for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (0.0, 40.0)] {
        s.click(x, y);
    }
    s.mode(CanvasMode::TransformPolygon);
    s.click(20.0, 20.0);
    s.drag((20.0, 20.0), (120.0, 80.0));

    let polygon = s.canvas.selected_polygon().unwrap();
    assert_close(polygon.vertices()[0], Point::new(120.0, 80.0));
    assert_close(polygon.vertices()[2], Point::new(160.0, 120.0));
    assert!(!s.canvas.is_dragging());
    // The drag did not end in a click, so the selection survives.
    assert!(s.canvas.selected_shape().is_some());
}

#[test]
fn build_and_edit_bezier_curve() {
    let mut s = Session::new();
    s.mode(CanvasMode::Bezier);
    s.click(0.0, 0.0);
    s.click(100.0, 0.0);
    s.click(100.0, 100.0);
    assert_eq!(s.canvas.control_points().len(), 3);

    let samples: Vec<Point> = s.canvas.curve().samples(2).collect();
    assert_close(samples[1], Point::new(75.0, 25.0));

    // Select the middle point and drag it.
    s.click(100.0, 0.0);
    assert_eq!(s.canvas.selected_control_point(), Some(1));
    s.drag((100.0, 0.0), (100.0, 50.0));
    assert_eq!(s.canvas.control_points()[1], Point::new(100.0, 50.0));
    assert_eq!(s.canvas.selected_control_point(), Some(1));

    let last = s.canvas.curve().samples(DEFAULT_CURVE_STEPS).last().unwrap();
    assert_close(last, Point::new(100.0, 100.0));

    // Clicking again deselects.
    s.click(500.0, 500.0);
    assert_eq!(s.canvas.selected_control_point(), None);
    assert_eq!(s.canvas.control_points().len(), 3);
}

#[test]
fn rotate_with_mouse_about_anchor() {
    let mut s = Session::new();
    for (x, y) in [(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)] {
        s.click(x, y);
    }
    s.mode(CanvasMode::TransformPolygon);
    s.click(15.0, 15.0);
    s.mode(CanvasMode::AddAnchor);
    s.click(15.0, 15.0);
    s.mode(CanvasMode::MouseRotate);

    // Quarter turn: from straight below the anchor to its left.
    s.feed(RawPointerEvent::Down {
        position: Point::new(15.0, 115.0),
        button: MouseButton::Left,
    });
    s.feed(RawPointerEvent::Move {
        position: Point::new(-85.0, 15.0),
    });
    s.feed(RawPointerEvent::Up {
        position: Point::new(-85.0, 15.0),
        button: MouseButton::Left,
    });

    let polygon = s.canvas.selected_polygon().unwrap();
    assert_close(polygon.vertices()[0], Point::new(20.0, 10.0));
    assert_close(polygon.vertices()[2], Point::new(10.0, 20.0));
}

#[test]
fn point_and_scale_commands() {
    let mut s = Session::new();
    for text in ["0 0", "10 0", "10 10", "0 10"] {
        s.canvas.apply_command(parse_point(text).unwrap());
    }
    assert_eq!(s.canvas.document().len(), 1);

    s.mode(CanvasMode::AddAnchor);
    s.click(0.0, 0.0);
    s.mode(CanvasMode::TransformPolygon);
    s.click(5.0, 5.0);
    s.canvas.apply_command(parse_scale("3 0.5").unwrap());

    let bounds = s.canvas.selected_polygon().unwrap().bounds();
    assert!((bounds.width() - 30.0).abs() < EPS);
    assert!((bounds.height() - 5.0).abs() < EPS);
}

#[test]
fn clear_resets_everything() {
    let mut s = Session::new();
    s.click(0.0, 0.0);
    s.click(50.0, 0.0);
    s.click(50.0, 50.0);
    s.mode(CanvasMode::Bezier);
    s.click(200.0, 200.0);
    s.mode(CanvasMode::AddAnchor);
    s.click(10.0, 10.0);

    s.canvas.apply_command(Command::Clear);
    assert!(s.canvas.document().is_empty());
    assert!(s.canvas.control_points().is_empty());
    assert!(s.canvas.anchor().is_none());
    assert!(s.canvas.selected_shape().is_none());
    assert!(s.canvas.selected_control_point().is_none());
    assert_eq!(s.canvas.curve().samples(DEFAULT_CURVE_STEPS).count(), 0);
}
