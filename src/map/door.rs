// src/map/door.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::Point2D;

/// Cardinal direction of a door. A door's direction names the room edge it
/// sits on and the way it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The 180° rotated direction. A room can attach to a door only through a
    /// door facing the opposite way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Next direction in the clockwise cycle N → E → S → W → N.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// One grid unit outward, with `y` growing northward.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A connection point on a room boundary.
///
/// Inside a template the coordinates are relative to the room origin; doors
/// returned by [`Room::get_door`](crate::map::Room::get_door) are absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Door {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "d")]
    pub direction: Direction,
}

impl Door {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Door { x, y, direction }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn opposite(&self) -> Direction {
        self.direction.opposite()
    }

    /// The same door shifted by `origin`, direction unchanged.
    pub fn translated(&self, origin: Point2D) -> Door {
        Door::new(self.x + origin.x, self.y + origin.y, self.direction)
    }

    pub fn distance_to(&self, point: &Point2D) -> f64 {
        self.position().distance_to(point)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involutive() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn test_four_clockwise_turns_return_home() {
        for d in Direction::ALL {
            assert_eq!(d.clockwise().clockwise().clockwise().clockwise(), d);
            assert_eq!(d.clockwise().clockwise(), d.opposite());
        }
    }

    #[test]
    fn test_door_equality_uses_position_and_direction() {
        let a = Door::new(5, 0, Direction::South);
        assert_eq!(a, Door::new(5, 0, Direction::South));
        assert_ne!(a, Door::new(5, 0, Direction::North));
        assert_ne!(a, Door::new(5, 1, Direction::South));
    }

    #[test]
    fn test_door_parses_short_direction() {
        let door: Door = serde_json::from_str(r#"{ "x": 10, "y": 20, "d": "N" }"#).unwrap();
        assert_eq!(door, Door::new(10, 20, Direction::North));
        assert_eq!(door.to_string(), "(10, 20, N)");
    }
}
