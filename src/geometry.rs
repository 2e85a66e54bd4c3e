//! Geometry for lasso strokes: points, bounding rectangles and the
//! overlap test that decides selection membership.

use serde::{Deserialize, Serialize};

/// A 2D point in surface-local coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle expressed as `{left, top, width, height}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Minimal axis-aligned rectangle enclosing all `points`.
    ///
    /// `None` for an empty slice. A single point yields a zero-area
    /// rectangle, which is a valid (degenerate) lasso.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut max_x) = (first.x, first.x);
        let (mut min_y, mut max_y) = (first.y, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            left: min_x,
            top: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        })
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Translate by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..*self
        }
    }

    /// Open-rectangle overlap test with strict inequalities.
    ///
    /// Rectangles that merely touch along an edge do not intersect; both
    /// rectangles must share area. Both must be expressed relative to the
    /// same origin.
    pub fn intersects(&self, other: &BoundingRect) -> bool {
        self.left < other.right()
            && self.right() > other.left
            && self.top < other.bottom()
            && self.bottom() > other.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points_min_max_reduction() {
        let pts = [Point::new(2.0, 3.0), Point::new(7.0, 1.0), Point::new(4.0, 9.0)];
        let rect = BoundingRect::from_points(&pts).unwrap();
        assert_eq!(rect, BoundingRect::new(2.0, 1.0, 5.0, 8.0));
    }

    #[test]
    fn from_points_empty_is_none() {
        assert!(BoundingRect::from_points(&[]).is_none());
    }

    #[test]
    fn from_points_single_point_zero_area() {
        let rect = BoundingRect::from_points(&[Point::new(5.0, 6.0)]).unwrap();
        assert_eq!(rect, BoundingRect::new(5.0, 6.0, 0.0, 0.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = BoundingRect::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingRect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn one_unit_overlap_intersects() {
        let a = BoundingRect::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingRect::new(9.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }
}
