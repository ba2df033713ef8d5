//! Line segment shape.

use kurbo::{Line as KurboLine, Point, Vec2};
use uuid::Uuid;

/// Stable identifier of a line, assigned at creation.
pub type LineId = Uuid;

/// Number of points sampled along a line when hit testing.
pub const HIT_SAMPLES: usize = 20;
/// Maximum distance from a sampled point that still counts as a hit.
pub const HIT_TOLERANCE: f64 = 20.0;

/// A straight segment from the point where a contact went down to where it is now.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub(crate) id: LineId,
    /// Start point.
    pub begin: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(begin: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            begin,
            end,
        }
    }

    /// Create a zero-length line at `point`.
    pub fn at(point: Point) -> Self {
        Self::new(point, point)
    }

    pub fn id(&self) -> LineId {
        self.id
    }

    /// Signed angle in degrees of the vector from `begin` to `end`.
    ///
    /// Measured as `atan2(-dx, dy)`, so a line pointing straight down the
    /// surface is 0° and one pointing right is -90°. A zero-length line
    /// yields 0.
    pub fn angle(&self) -> f64 {
        let delta = self.end - self.begin;
        (-delta.x).atan2(delta.y).to_degrees()
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        self.begin.distance(self.end)
    }

    /// Point at parameter `t` along the line (0 = begin, 1 = end).
    pub fn sample(&self, t: f64) -> Point {
        self.begin.lerp(self.end, t)
    }

    /// Move both endpoints by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        self.begin += delta;
        self.end += delta;
    }

    /// Check whether `point` lies within [`HIT_TOLERANCE`] of any sample.
    ///
    /// Samples are taken at `t = 0, 0.05, ..., 0.95`; the end point itself
    /// is not sampled.
    pub fn hit_test(&self, point: Point) -> bool {
        (0..HIT_SAMPLES)
            .map(|i| i as f64 / HIT_SAMPLES as f64)
            .any(|t| self.sample(t).distance(point) < HIT_TOLERANCE)
    }

    /// Whether both lines cover the same segment, ignoring identity.
    pub fn same_segment(&self, other: &Line) -> bool {
        self.begin == other.begin && self.end == other.end
    }

    /// Get as a kurbo Line.
    pub fn as_kurbo(&self) -> KurboLine {
        KurboLine::new(self.begin, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lines_get_distinct_ids() {
        let a = Line::at(Point::new(5.0, 5.0));
        let b = Line::at(Point::new(5.0, 5.0));
        assert_ne!(a.id(), b.id());
        assert!(a.same_segment(&b));
    }

    #[test]
    fn test_angle_axes() {
        let down = Line::new(Point::ZERO, Point::new(0.0, 10.0));
        let right = Line::new(Point::ZERO, Point::new(10.0, 0.0));
        let left = Line::new(Point::ZERO, Point::new(-10.0, 0.0));
        assert!(down.angle().abs() < 1e-9);
        assert!((right.angle() + 90.0).abs() < 1e-9);
        assert!((left.angle() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_degenerate() {
        let line = Line::at(Point::new(3.0, 4.0));
        assert_eq!(line.angle(), 0.0);
    }

    #[test]
    fn test_hit_test_on_line() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(line.hit_test(Point::new(50.0, 0.0)));
        assert!(line.hit_test(Point::new(50.0, 19.0)));
        assert!(!line.hit_test(Point::new(50.0, 25.0)));
        assert!(!line.hit_test(Point::new(50.0, 20.0)));
    }

    #[test]
    fn test_hit_test_skips_end_point() {
        // Last sample sits at t = 0.95, i.e. x = 950.
        let line = Line::new(Point::new(0.0, 0.0), Point::new(1000.0, 0.0));
        assert!(line.hit_test(Point::new(0.0, 0.0)));
        assert!(!line.hit_test(Point::new(1000.0, 0.0)));
        assert!(line.hit_test(Point::new(960.0, 0.0)));
    }

    #[test]
    fn test_translate() {
        let mut line = Line::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        line.translate(Vec2::new(5.0, -5.0));
        assert_eq!(line.begin, Point::new(5.0, -5.0));
        assert_eq!(line.end, Point::new(15.0, 5.0));
    }

    #[test]
    fn test_sample_midpoint() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(100.0, 100.0));
        let mid = line.sample(0.5);
        assert!((mid.x - 50.0).abs() < f64::EPSILON);
        assert!((mid.y - 50.0).abs() < f64::EPSILON);
    }
}
