//! Point transforms about an anchor.
//!
//! Angles are taken in degrees at the API boundary and converted to radians
//! internally. Coordinates are kept as `f64`; nothing here rounds.

use kurbo::Point;

/// Rotate `point` by `angle_degrees` around `anchor`.
///
/// Positive angles turn clockwise on screen (y grows downwards).
pub fn rotate_point(angle_degrees: f64, point: Point, anchor: Point) -> Point {
    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let dx = point.x - anchor.x;
    let dy = point.y - anchor.y;
    Point::new(
        anchor.x + dx * cos - dy * sin,
        anchor.y + dx * sin + dy * cos,
    )
}

/// Scale `point` away from `anchor`, independently per axis.
pub fn scale_point(scale_x: f64, scale_y: f64, point: Point, anchor: Point) -> Point {
    Point::new(
        anchor.x + (point.x - anchor.x) * scale_x,
        anchor.y + (point.y - anchor.y) * scale_y,
    )
}

/// Rotate every point, returning a fresh vertex list.
pub fn rotate_points(angle_degrees: f64, points: &[Point], anchor: Point) -> Vec<Point> {
    points
        .iter()
        .map(|&p| rotate_point(angle_degrees, p, anchor))
        .collect()
}

/// Scale every point, returning a fresh vertex list.
pub fn scale_points(scale_x: f64, scale_y: f64, points: &[Point], anchor: Point) -> Vec<Point> {
    points
        .iter()
        .map(|&p| scale_point(scale_x, scale_y, p, anchor))
        .collect()
}

/// Angle in degrees between the anchor and a pointer position.
///
/// Measured as `atan2(anchor.x - px, py - anchor.y)`; only differences of this
/// value are meaningful (rotate-with-mouse works on deltas).
pub fn drag_angle(anchor: Point, pointer: Point) -> f64 {
    (anchor.x - pointer.x).atan2(pointer.y - anchor.y).to_degrees()
}

/// Binomial coefficient C(n, k) in floating point, via the multiplicative formula.
///
/// Exact while the coefficient fits in 53 bits; beyond that it keeps f64
/// precision instead of wrapping. Saturates to infinity past n of about 1030.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (1..=k).fold(1.0, |acc, i| acc * (n - k + i) as f64 / i as f64)
}
