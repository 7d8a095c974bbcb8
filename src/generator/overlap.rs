// src/generator/overlap.rs

use log::debug;

use crate::map::{Edge, Room};

/// Whether `candidate` leaves the `width` x `height` grid or has an edge
/// crossing an edge of any room in `placed`.
///
/// Only perpendicular edge pairs are tested, so two rooms whose sides run
/// along the same line without crossing are not detected.
pub fn overlaps<'a>(
    candidate: &Room,
    placed: impl IntoIterator<Item = &'a Room>,
    width: i32,
    height: i32,
) -> bool {
    if !candidate.fits_within(width, height) {
        debug!(target: "overlap", "{} leaves the grid at {}, {}", candidate.name, candidate.x, candidate.y);
        return true;
    }

    let existing: Vec<Edge> = placed.into_iter().flat_map(|room| room.get_edges()).collect();
    for test in candidate.get_edges() {
        for edge in &existing {
            if let Some(point) = test.intersection(edge) {
                debug!(target: "overlap", "{} crosses existing geometry at {:?}", candidate.name, point);
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{Direction, Door};

    fn start() -> Room {
        Room::at(230, 0, 20, 10, "start", vec![Door::new(10, 10, Direction::North)])
    }

    #[test]
    fn test_clear_room_passes() {
        let candidate = Room::at(235, 11, 10, 50, "long hall", vec![]);
        assert!(!overlaps(&candidate, [&start()], 500, 500));
    }

    #[test]
    fn test_out_of_bounds() {
        let left = Room::at(-1, 100, 10, 10, "left", vec![]);
        let top = Room::at(100, 495, 10, 10, "top", vec![]);
        assert!(overlaps(&left, [], 500, 500));
        assert!(overlaps(&top, [], 500, 500));
    }

    #[test]
    fn test_crossing_rooms() {
        let candidate = Room::at(240, 5, 30, 30, "crossing", vec![]);
        assert!(overlaps(&candidate, [&start()], 500, 500));
    }

    #[test]
    fn test_touching_corner_counts() {
        let candidate = Room::at(250, 10, 10, 10, "corner", vec![]);
        assert!(overlaps(&candidate, [&start()], 500, 500));
    }

    #[test]
    fn test_contained_room_is_missed() {
        // No edges cross when one room sits entirely inside another.
        let outer = Room::at(100, 100, 60, 60, "outer", vec![]);
        let inner = Room::at(110, 110, 10, 10, "inner", vec![]);
        assert!(!overlaps(&inner, [&outer], 500, 500));
    }

    #[test]
    fn test_shared_side_is_caught_through_corners() {
        // Parallel edges are never compared, but a corner of one room always
        // lands on the shared line of the other.
        let below = Room::at(100, 0, 20, 10, "below", vec![]);
        let above = Room::at(100, 10, 20, 10, "above", vec![]);
        assert!(overlaps(&above, [&below], 500, 500));
        let shifted = Room::at(105, 10, 10, 10, "shifted", vec![]);
        assert!(overlaps(&shifted, [&below], 500, 500));
    }
}
