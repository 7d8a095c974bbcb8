// src/map/edge.rs

use crate::utils::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One axis-aligned side of a placed room.
///
/// A vertical edge sits at `x == fixed` and spans `low..=high` in `y`; a
/// horizontal edge sits at `y == fixed` and spans `low..=high` in `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub orientation: Orientation,
    pub fixed: i32,
    pub low: i32,
    pub high: i32,
}

impl Edge {
    /// Builds the edge running between two corners. The corners must share
    /// either their `x` or their `y`.
    pub fn between(a: Point2D, b: Point2D) -> Self {
        if a.x == b.x {
            Edge {
                orientation: Orientation::Vertical,
                fixed: a.x,
                low: a.y.min(b.y),
                high: a.y.max(b.y),
            }
        } else {
            Edge {
                orientation: Orientation::Horizontal,
                fixed: a.y,
                low: a.x.min(b.x),
                high: a.x.max(b.x),
            }
        }
    }

    pub fn spans(&self, value: i32) -> bool {
        self.low <= value && value <= self.high
    }

    /// Crossing point of a vertical and a horizontal edge, bounds inclusive.
    ///
    /// Parallel edges never report an intersection, even when collinear and
    /// sharing a sub-range.
    pub fn intersection(&self, other: &Edge) -> Option<Point2D> {
        let (vertical, horizontal) = match (self.orientation, other.orientation) {
            (Orientation::Vertical, Orientation::Horizontal) => (self, other),
            (Orientation::Horizontal, Orientation::Vertical) => (other, self),
            _ => return None,
        };
        let point = Point2D::new(vertical.fixed, horizontal.fixed);
        if horizontal.spans(point.x) && vertical.spans(point.y) {
            Some(point)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_normalizes_range() {
        let e = Edge::between(Point2D::new(5, 30), Point2D::new(5, 10));
        assert_eq!(e.orientation, Orientation::Vertical);
        assert_eq!((e.fixed, e.low, e.high), (5, 10, 30));
    }

    #[test]
    fn test_perpendicular_crossing() {
        let v = Edge::between(Point2D::new(10, 0), Point2D::new(10, 20));
        let h = Edge::between(Point2D::new(0, 5), Point2D::new(30, 5));
        assert_eq!(v.intersection(&h), Some(Point2D::new(10, 5)));
        assert_eq!(h.intersection(&v), Some(Point2D::new(10, 5)));
    }

    #[test]
    fn test_touching_endpoints_count() {
        let v = Edge::between(Point2D::new(10, 0), Point2D::new(10, 20));
        let h = Edge::between(Point2D::new(10, 20), Point2D::new(40, 20));
        assert_eq!(v.intersection(&h), Some(Point2D::new(10, 20)));
    }

    #[test]
    fn test_disjoint_perpendicular() {
        let v = Edge::between(Point2D::new(10, 0), Point2D::new(10, 20));
        let h = Edge::between(Point2D::new(11, 5), Point2D::new(30, 5));
        assert_eq!(v.intersection(&h), None);
    }

    #[test]
    fn test_collinear_overlap_is_not_reported() {
        // Known limitation of the detector: shared collinear segments pass.
        let a = Edge::between(Point2D::new(0, 5), Point2D::new(30, 5));
        let b = Edge::between(Point2D::new(10, 5), Point2D::new(40, 5));
        assert_eq!(a.intersection(&b), None);
    }
}
