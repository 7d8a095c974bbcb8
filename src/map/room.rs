// src/map/room.rs

use log::debug;
use serde::Deserialize;

use crate::map::{Direction, Door, Edge};
use crate::utils::Point2D;

/// A rectangular room with doors on its boundary.
///
/// A room fresh from the catalog is an unplaced template: its origin is
/// `(0, 0)` and it has no entrance. Placement always happens on a clone, so a
/// template is never mutated by generation.
#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    #[serde(skip)]
    pub x: i32,
    #[serde(skip)]
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub name: String,
    /// Door positions relative to the room origin.
    pub doors: Vec<Door>,
    /// Index of the door used to attach this room to its predecessor.
    #[serde(skip)]
    pub entrance: Option<usize>,
}

impl Room {
    /// Creates an unplaced template.
    pub fn new(w: i32, h: i32, name: impl Into<String>, doors: Vec<Door>) -> Self {
        Room::at(0, 0, w, h, name, doors)
    }

    /// Creates a room already sitting at `(x, y)`, such as the start room.
    pub fn at(x: i32, y: i32, w: i32, h: i32, name: impl Into<String>, doors: Vec<Door>) -> Self {
        Room {
            x,
            y,
            w,
            h,
            name: name.into(),
            doors,
            entrance: None,
        }
    }

    pub fn origin(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Door `index` translated into grid coordinates.
    pub fn get_door(&self, index: usize) -> Option<Door> {
        self.doors.get(index).map(|door| door.translated(self.origin()))
    }

    pub fn get_directions(&self) -> Vec<Direction> {
        self.doors.iter().map(|door| door.direction).collect()
    }

    pub fn has_direction(&self, direction: Direction) -> bool {
        self.doors.iter().any(|door| door.direction == direction)
    }

    /// First local door facing `direction`, in declaration order.
    pub fn get_door_by_d(&self, direction: Direction) -> Option<Door> {
        self.doors.iter().copied().find(|door| door.direction == direction)
    }

    /// Indices of every door other than the entrance.
    pub fn exit_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.doors.len()).filter(move |&i| Some(i) != self.entrance)
    }

    /// Origin this room would take if `entrance` (a local door) were attached
    /// to `active_door` (absolute). The entrance lands one unit outward from
    /// the active door, leaving the doorway gap between both rooms.
    pub fn origin_for(active_door: &Door, entrance: &Door) -> Point2D {
        let (dx, dy) = active_door.direction.delta();
        Point2D::new(
            active_door.x - entrance.x + dx,
            active_door.y - entrance.y + dy,
        )
    }

    /// Moves this room so that `entrance` connects to `active_door` and
    /// records the entrance index. Returns `None` and leaves the room
    /// untouched when `entrance` is not one of its doors.
    pub fn place_room(&mut self, active_door: &Door, entrance: &Door) -> Option<usize> {
        let index = self.doors.iter().position(|door| door == entrance)?;
        let origin = Room::origin_for(active_door, entrance);
        self.x = origin.x;
        self.y = origin.y;
        self.entrance = Some(index);
        debug!(target: "place_room", "{} placed at {}, {}", self.name, self.x, self.y);
        Some(index)
    }

    /// A placed copy of this template attached to `active_door` through its
    /// first door facing the opposite way.
    pub fn placed_against(&self, active_door: &Door) -> Option<Room> {
        let entrance = self.get_door_by_d(active_door.opposite())?;
        let mut copy = self.clone();
        copy.place_room(active_door, &entrance)?;
        Some(copy)
    }

    /// Corners in the order bottom-left, top-left, top-right, bottom-right.
    pub fn corners(&self) -> [Point2D; 4] {
        [
            Point2D::new(self.x, self.y),
            Point2D::new(self.x, self.y + self.h),
            Point2D::new(self.x + self.w, self.y + self.h),
            Point2D::new(self.x + self.w, self.y),
        ]
    }

    pub fn get_edges(&self) -> [Edge; 4] {
        let c = self.corners();
        [
            Edge::between(c[0], c[1]),
            Edge::between(c[1], c[2]),
            Edge::between(c[2], c[3]),
            Edge::between(c[3], c[0]),
        ]
    }

    /// Whether the footprint lies inside `[0, width] x [0, height]`.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        (0..=width - self.w).contains(&self.x) && (0..=height - self.h).contains(&self.y)
    }

    /// Unplaced copy turned clockwise by `degree` (a multiple of 90).
    pub fn get_rotated(&self, degree: u32) -> Room {
        debug_assert!(degree % 90 == 0, "rotation must be a multiple of 90°");
        let mut output = Room::new(self.w, self.h, self.name.clone(), self.doors.clone());
        for _ in 0..degree / 90 {
            output = output.rotated_quarter();
        }
        if degree > 0 {
            output.name = format!("{} r{}", self.name, degree);
        }
        output
    }

    fn rotated_quarter(&self) -> Room {
        let doors = self
            .doors
            .iter()
            .map(|door| Door::new(door.y, self.w - door.x, door.direction.clockwise()))
            .collect();
        Room::new(self.h, self.w, self.name.clone(), doors)
    }

    /// The non-entrance door, in grid coordinates, closest to `goal`.
    pub fn get_best_door(&self, goal: &Point2D) -> Option<Door> {
        self.exit_indices()
            .filter_map(|i| self.get_door(i))
            .min_by(|a, b| a.distance_to(goal).total_cmp(&b.distance_to(goal)))
    }

    /// Worst-case distance from `goal` to any non-entrance door if this
    /// template were attached through `entrance`. The room is not moved.
    pub fn test_distance(&self, active_door: &Door, entrance: &Door, goal: &Point2D) -> Option<f64> {
        let origin = Room::origin_for(active_door, entrance);
        self.doors
            .iter()
            .filter(|door| *door != entrance)
            .map(|door| door.translated(origin).distance_to(goal))
            .max_by(f64::total_cmp)
    }
}

/// Geometric equality: same size and the same set of doors, in any order.
impl PartialEq for Room {
    fn eq(&self, other: &Room) -> bool {
        self.w == other.w
            && self.h == other.h
            && self.doors.len() == other.doors.len()
            && self.doors.iter().all(|door| other.doors.contains(door))
    }
}

impl Eq for Room {}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use Direction::*;

    fn long_hall() -> Room {
        Room::new(10, 50, "long hall", vec![Door::new(5, 0, South), Door::new(5, 50, North)])
    }

    fn t_shaped() -> Room {
        Room::new(
            30,
            40,
            "t shaped",
            vec![Door::new(15, 0, South), Door::new(0, 35, West), Door::new(30, 35, East)],
        )
    }

    #[test]
    fn test_get_door_is_absolute() {
        let start = Room::at(230, 0, 20, 10, "start", vec![Door::new(10, 10, North)]);
        assert_eq!(start.get_door(0), Some(Door::new(240, 10, North)));
        assert_eq!(start.get_door(1), None);
    }

    #[test]
    fn test_get_door_by_d_takes_first_match() {
        let u_turn = Room::new(50, 20, "u turn", vec![Door::new(10, 0, South), Door::new(40, 0, South)]);
        assert_eq!(u_turn.get_door_by_d(South), Some(Door::new(10, 0, South)));
        assert_eq!(u_turn.get_door_by_d(North), None);
        assert_eq!(u_turn.get_directions(), vec![South, South]);
    }

    #[test]
    fn test_place_long_hall_north_of_active_door() {
        let mut hall = long_hall();
        let active = Door::new(240, 10, North);
        let entrance = hall.get_door_by_d(South).unwrap();
        assert_eq!(hall.place_room(&active, &entrance), Some(0));
        assert_eq!((hall.x, hall.y), (235, 11));
        assert_eq!(hall.entrance, Some(0));
    }

    #[test]
    fn test_placed_entrance_is_one_unit_outward() {
        for direction in Direction::ALL {
            let active = Door::new(200, 200, direction);
            let room = t_shaped().get_rotated(90);
            for turn in [0, 90, 180, 270] {
                let template = room.get_rotated(turn);
                if let Some(placed) = template.placed_against(&active) {
                    let entrance = placed.get_door(placed.entrance.unwrap()).unwrap();
                    let (dx, dy) = direction.delta();
                    assert_eq!(entrance.position(), active.position().offset(dx, dy));
                    assert_eq!(entrance.direction, direction.opposite());
                }
            }
        }
    }

    #[test]
    fn test_place_rejects_foreign_door() {
        let mut hall = long_hall();
        let foreign = Door::new(1, 1, South);
        assert_eq!(hall.place_room(&Door::new(0, 0, North), &foreign), None);
        assert_eq!((hall.x, hall.y, hall.entrance), (0, 0, None));
    }

    #[test]
    fn test_placed_against_leaves_template_untouched() {
        let hall = long_hall();
        let placed = hall.placed_against(&Door::new(240, 10, North)).unwrap();
        assert_eq!((placed.x, placed.y), (235, 11));
        assert_eq!((hall.x, hall.y, hall.entrance), (0, 0, None));
    }

    #[test]
    fn test_edges_follow_corners() {
        let room = Room::at(10, 20, 30, 40, "box", vec![]);
        let edges = room.get_edges();
        assert_eq!(edges[0], Edge::between(Point2D::new(10, 20), Point2D::new(10, 60)));
        assert_eq!(edges[1].fixed, 60);
        assert_eq!(edges[2].fixed, 40);
        assert_eq!(edges[3].fixed, 20);
        assert_eq!((edges[3].low, edges[3].high), (10, 40));
    }

    #[test]
    fn test_rotation_maps_doors() {
        let rotated = long_hall().get_rotated(90);
        assert_eq!((rotated.w, rotated.h), (50, 10));
        assert_eq!(rotated.doors, vec![Door::new(0, 5, West), Door::new(50, 5, East)]);
        assert_eq!(rotated.name, "long hall r90");
    }

    #[test]
    fn test_rotation_is_a_group_action() {
        for room in [long_hall(), t_shaped()] {
            assert_eq!(room.get_rotated(90).get_rotated(270), room);
            assert_eq!(room.get_rotated(360), room);
            assert_eq!(room.get_rotated(180).get_rotated(180), room);
        }
        assert_ne!(t_shaped().get_rotated(90), t_shaped());
    }

    #[test]
    fn test_equality_ignores_order_and_name() {
        let a = long_hall();
        let b = Room::new(10, 50, "other", vec![Door::new(5, 50, North), Door::new(5, 0, South)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_best_door_skips_entrance() {
        let mut room = t_shaped();
        let entrance = room.doors[0];
        room.place_room(&Door::new(100, 100, North), &entrance);
        // origin is (85, 101); the west door sits at (85, 136)
        let best = room.get_best_door(&Point2D::new(0, 136)).unwrap();
        assert_eq!(best, Door::new(85, 136, West));
        let below = room.get_best_door(&Point2D::new(100, 0)).unwrap();
        assert_ne!(below.direction, South);
    }

    #[test]
    fn test_test_distance_is_worst_case() {
        let room = t_shaped();
        let active = Door::new(100, 100, North);
        let entrance = room.doors[0];
        let goal = Point2D::new(0, 136);
        let worst = room.test_distance(&active, &entrance, &goal).unwrap();
        // east door would land at (115, 136)
        assert_approx_eq!(worst, 115.0);
        assert_eq!((room.x, room.y), (0, 0));
    }

    #[test]
    fn test_fits_within() {
        let room = Room::at(480, 490, 20, 10, "edge", vec![]);
        assert!(room.fits_within(500, 500));
        assert!(!room.fits_within(499, 500));
        assert!(!Room::at(-1, 0, 5, 5, "neg", vec![]).fits_within(500, 500));
    }

    #[test]
    fn test_template_from_json() {
        let room: Room = serde_json::from_str(
            r#"{ "name": "long hall", "w": 10, "h": 50,
                 "doors": [{ "x": 5, "y": 0, "d": "S" }, { "x": 5, "y": 50, "d": "N" }] }"#,
        )
        .unwrap();
        assert_eq!(room, long_hall());
        assert_eq!(room.entrance, None);
    }
}
