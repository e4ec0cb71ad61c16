//! The global Bézier curve built from user-placed control points.

use crate::geometry::binomial;
use kurbo::{Point, Rect, Vec2};

/// Number of parameter steps used when the curve is sampled for display.
pub const DEFAULT_CURVE_STEPS: usize = 5000;

/// Side length of the square hit box around a control point.
pub const CONTROL_POINT_HIT_SIZE: f64 = 12.0;

/// Slack on the max-x cut-off so rounding at the terminal point does not trim it.
const X_END_EPSILON: f64 = 1e-9;

/// Ordered control points of a single Bézier curve.
///
/// Point `i` weights Bernstein term `i` of degree `len - 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BezierCurve {
    points: Vec<Point>,
}

impl BezierCurve {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curve from existing control points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Control points in parameter order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a control point, returning its index.
    pub fn push(&mut self, point: Point) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Move a control point. Returns false for an unknown index.
    pub fn set(&mut self, index: usize, point: Point) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p = point;
                true
            }
            None => false,
        }
    }

    /// Shift a control point by `delta`.
    pub fn translate(&mut self, index: usize, delta: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                *p += delta;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Index of the first control point whose hit box contains `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.points
            .iter()
            .position(|&p| control_point_hit_box(p).contains(point))
    }

    /// Evaluate the curve at a single parameter value.
    ///
    /// Returns `None` when there are no control points.
    pub fn evaluate(&self, t: f64) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let degree = self.points.len() - 1;
        Some(Point::new(
            bernstein_sum(&self.points, degree, t, |p| p.x),
            bernstein_sum(&self.points, degree, t, |p| p.y),
        ))
    }

    /// Sample the curve for display.
    ///
    /// `t` runs from 0 to 1 in `1 / step_count` increments (a step count of 0
    /// is treated as 1). Sampling stops at the first point whose x exceeds the
    /// rightmost control point.
    pub fn samples(&self, step_count: usize) -> BezierSamples<'_> {
        let x_end = self
            .points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max);
        BezierSamples {
            points: &self.points,
            step_count: step_count.max(1),
            step: 0,
            x_end,
            done: self.points.is_empty(),
        }
    }
}

/// The square hit box of a control point, centred on it.
pub fn control_point_hit_box(point: Point) -> Rect {
    Rect::from_center_size(point, (CONTROL_POINT_HIT_SIZE, CONTROL_POINT_HIT_SIZE))
}

fn bernstein_sum(points: &[Point], degree: usize, t: f64, coord: impl Fn(&Point) -> f64) -> f64 {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let newton = binomial(degree, i);
            newton * t.powi(i as i32) * (1.0 - t).powi((degree - i) as i32) * coord(p)
        })
        .sum()
}

/// Lazy iterator over sampled curve points. Clone it to restart.
#[derive(Debug, Clone)]
pub struct BezierSamples<'a> {
    points: &'a [Point],
    step_count: usize,
    step: usize,
    x_end: f64,
    done: bool,
}

impl Iterator for BezierSamples<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let t = self.step as f64 / self.step_count as f64;
        if self.step == self.step_count {
            self.done = true;
        } else {
            self.step += 1;
        }

        let degree = self.points.len() - 1;
        let x = bernstein_sum(self.points, degree, t, |p| p.x);
        if x > self.x_end + X_END_EPSILON {
            self.done = true;
            return None;
        }
        let y = bernstein_sum(self.points, degree, t, |p| p.y);
        Some(Point::new(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, Some((self.step_count - self.step).saturating_add(1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_empty_curve_has_no_samples() {
        let curve = BezierCurve::new();
        assert_eq!(curve.samples(DEFAULT_CURVE_STEPS).count(), 0);
        assert!(curve.evaluate(0.5).is_none());
    }

    #[test]
    fn test_single_point_collapses() {
        let p = Point::new(42.0, 7.0);
        let curve = BezierCurve::from_points(vec![p]);
        let samples: Vec<Point> = curve.samples(10).collect();
        assert_eq!(samples.len(), 11);
        assert!(samples.iter().all(|&s| close(s, p)));
    }

    #[test]
    fn test_two_points_are_linear() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(40.0, 30.0);
        let curve = BezierCurve::from_points(vec![a, b]);
        let samples: Vec<Point> = curve.samples(4).collect();
        assert_eq!(samples.len(), 5);
        for (i, s) in samples.iter().enumerate() {
            let t = i as f64 / 4.0;
            assert!(close(*s, a.lerp(b, t)), "t={t}: {s:?}");
        }
    }

    #[test]
    fn test_quadratic_example() {
        let curve = BezierCurve::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ]);
        let samples: Vec<Point> = curve.samples(2).collect();
        assert_eq!(samples.len(), 3);
        assert!(close(samples[0], Point::new(0.0, 0.0)));
        assert!(close(samples[1], Point::new(75.0, 25.0)));
        assert!(close(samples[2], Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_max_x_cut_off_keeps_hull_bounded_curve() {
        // The middle control point is the rightmost one; the curve bulges
        // towards it but stays inside the control hull, so nothing is trimmed.
        let curve = BezierCurve::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(300.0, 50.0),
            Point::new(100.0, 100.0),
        ]);
        let samples: Vec<Point> = curve.samples(100).collect();
        assert_eq!(samples.len(), 101);
        assert!(samples.iter().all(|p| p.x <= 300.0));
        assert!(close(*samples.last().unwrap(), Point::new(100.0, 100.0)));

        // Leftward curve: the first sample already sits at max x.
        let leftward = BezierCurve::from_points(vec![Point::new(50.0, 0.0), Point::new(0.0, 0.0)]);
        assert_eq!(leftward.samples(5).count(), 6);
    }

    #[test]
    fn test_size_hint_bounds_sample_count() {
        let curve = BezierCurve::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        let mut samples = curve.samples(4);
        assert_eq!(samples.size_hint(), (0, Some(5)));
        samples.next();
        assert_eq!(samples.size_hint(), (0, Some(4)));
        assert_eq!(BezierCurve::new().samples(4).size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_huge_step_count_size_hint() {
        let curve = BezierCurve::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        let mut samples = curve.samples(usize::MAX);
        assert_eq!(samples.size_hint(), (0, Some(usize::MAX)));
        assert!(close(samples.next().unwrap(), Point::new(0.0, 0.0)));
        assert_eq!(samples.size_hint(), (0, Some(usize::MAX)));
    }

    #[test]
    fn test_many_coincident_points_collapse() {
        let p = Point::new(10.0, 10.0);
        let curve = BezierCurve::from_points(vec![p; 70]);
        assert!(close(curve.evaluate(0.5).unwrap(), p));

        let curve = BezierCurve::from_points(vec![p; 140]);
        let samples: Vec<Point> = curve.samples(4).collect();
        assert_eq!(samples.len(), 5);
        assert!(samples.iter().all(|&s| close(s, p)), "{samples:?}");
    }

    #[test]
    fn test_samples_are_restartable() {
        let curve = BezierCurve::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        let samples = curve.samples(3);
        let first: Vec<Point> = samples.clone().collect();
        let second: Vec<Point> = samples.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        let curve = BezierCurve::from_points(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        let samples: Vec<Point> = curve.samples(0).collect();
        assert_eq!(samples.len(), 2);
    }

    #[test]
    fn test_evaluate_matches_samples() {
        let curve = BezierCurve::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 80.0),
            Point::new(120.0, -10.0),
            Point::new(200.0, 40.0),
        ]);
        let samples: Vec<Point> = curve.samples(8).collect();
        for (i, s) in samples.iter().enumerate() {
            let p = curve.evaluate(i as f64 / 8.0).unwrap();
            assert!(close(*s, p));
        }
    }

    #[test]
    fn test_control_point_hit_box() {
        let mut curve = BezierCurve::new();
        curve.push(Point::new(100.0, 100.0));
        curve.push(Point::new(200.0, 100.0));

        assert_eq!(curve.hit_test(Point::new(100.0, 100.0)), Some(0));
        assert_eq!(curve.hit_test(Point::new(105.0, 95.0)), Some(0));
        assert_eq!(curve.hit_test(Point::new(198.0, 103.0)), Some(1));
        assert_eq!(curve.hit_test(Point::new(110.0, 100.0)), None);
    }

    #[test]
    fn test_set_and_translate() {
        let mut curve = BezierCurve::from_points(vec![Point::new(1.0, 1.0)]);
        assert!(curve.set(0, Point::new(5.0, 5.0)));
        assert!(curve.translate(0, Vec2::new(1.0, -1.0)));
        assert_eq!(curve.get(0), Some(Point::new(6.0, 4.0)));
        assert!(!curve.set(3, Point::ZERO));
        assert!(!curve.translate(3, Vec2::ZERO));
    }
}
