// src/utils/geometry.rs
use serde::{Deserialize, Serialize};

/// An integer point on the dungeon grid. The origin is the bottom-left corner
/// and `y` grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point2D) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Point2D {
        Point2D::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Point2D::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Point2D::new(0, 0);
        let b = Point2D::new(3, 4);
        assert_approx_eq!(a.distance_to(&b), 5.0);
        assert_approx_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Point2D::new(240, 10).offset(0, 1), Point2D::new(240, 11));
    }
}
