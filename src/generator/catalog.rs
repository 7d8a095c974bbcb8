// src/generator/catalog.rs

use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::generator::{
    GeneratorError, Result, DEFAULT_GRID_SIZE, FINISH_NAME, FINISH_SIZE, START_NAME,
};
use crate::map::{Direction, Door, Room};

use Direction::*;

/// The owned set of prefab templates a generator draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefabCatalog {
    rooms: Vec<Room>,
}

impl PrefabCatalog {
    pub fn new(rooms: Vec<Room>) -> Result<Self> {
        if rooms.is_empty() {
            return Err(GeneratorError::EmptyCatalog);
        }
        if let Some(room) = rooms.iter().find(|room| room.doors.is_empty()) {
            return Err(GeneratorError::DoorlessPrefab(room.name.clone()));
        }
        for room in rooms.iter().filter(|room| room.doors.len() < 2) {
            warn!("prefab '{}' has a single door and can never be grown through", room.name);
        }
        Ok(PrefabCatalog { rooms })
    }

    /// Reads a JSON array of templates.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rooms: Vec<Room> = serde_json::from_str(json)?;
        Self::new(rooms)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// Appends the 90°, 180° and 270° turn of every template unless a
    /// geometrically equal room is already present. Idempotent.
    pub fn add_rotated_prefabs(&mut self) {
        let base_len = self.rooms.len();
        for i in 0..base_len {
            for degree in [90, 180, 270] {
                let rotated = self.rooms[i].get_rotated(degree);
                if !self.rooms.contains(&rotated) {
                    debug!(target: "rotated_prefabs", "adding rotated room {}", rotated.name);
                    self.rooms.push(rotated);
                }
            }
        }
    }

    /// Templates that can be attached to `active_door` of the room named
    /// `active_name`. Rooms sharing the active room's name, names listed in
    /// `failed`, and rooms without a door besides their entrance are skipped.
    pub fn candidates<'a>(
        &'a self,
        active_name: &'a str,
        active_door: &Door,
        failed: &'a [String],
    ) -> impl Iterator<Item = &'a Room> + 'a {
        let needed = active_door.opposite();
        self.rooms.iter().filter(move |room| {
            room.has_direction(needed)
                && room.doors.len() > 1
                && room.name != active_name
                && !failed.contains(&room.name)
        })
    }
}

impl Default for PrefabCatalog {
    fn default() -> Self {
        PrefabCatalog {
            rooms: default_prefabs(),
        }
    }
}

/// The stock templates, before rotation.
pub fn default_prefabs() -> Vec<Room> {
    vec![
        Room::new(
            60,
            60,
            "big square",
            vec![
                Door::new(30, 0, South),
                Door::new(30, 60, North),
                Door::new(0, 30, West),
                Door::new(60, 30, East),
            ],
        ),
        Room::new(10, 50, "long hall", vec![Door::new(5, 0, South), Door::new(5, 50, North)]),
        Room::new(
            30,
            40,
            "t shaped",
            vec![Door::new(15, 0, South), Door::new(0, 35, West), Door::new(30, 35, East)],
        ),
        Room::new(50, 20, "u turn", vec![Door::new(10, 0, South), Door::new(40, 0, South)]),
        Room::new(30, 30, "left turn", vec![Door::new(15, 0, South), Door::new(0, 15, West)]),
        Room::new(30, 30, "right turn", vec![Door::new(15, 0, South), Door::new(30, 15, East)]),
        Room::new(
            20,
            20,
            "small square",
            vec![
                Door::new(10, 0, South),
                Door::new(10, 20, North),
                Door::new(0, 10, West),
                Door::new(20, 10, East),
            ],
        ),
        Room::new(
            30,
            40,
            "upside down t",
            vec![Door::new(15, 40, North), Door::new(0, 35, West), Door::new(30, 35, East)],
        ),
    ]
}

/// A 20x10 start room on the bottom edge of a grid `grid_width` wide, just
/// left of centre, opening north.
pub fn start_room(grid_width: i32) -> Room {
    Room::at(grid_width / 2 - 20, 0, 20, 10, START_NAME, vec![Door::new(10, 10, North)])
}

/// The start room of the stock 500x500 grid, at (230, 0).
pub fn default_start_room() -> Room {
    start_room(DEFAULT_GRID_SIZE)
}

/// The synthetic room that ends every path. It has a door on each side so it
/// can attach to any active door.
pub fn finish_room() -> Room {
    let half = FINISH_SIZE / 2;
    Room::new(
        FINISH_SIZE,
        FINISH_SIZE,
        FINISH_NAME,
        vec![
            Door::new(half, 0, South),
            Door::new(half, FINISH_SIZE, North),
            Door::new(0, half, West),
            Door::new(FINISH_SIZE, half, East),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_duplicates(rooms: &[Room]) -> bool {
        rooms
            .iter()
            .enumerate()
            .any(|(i, a)| rooms[i + 1..].iter().any(|b| a == b))
    }

    #[test]
    fn test_rotation_expansion_dedups() {
        let mut catalog = PrefabCatalog::default();
        catalog.add_rotated_prefabs();
        assert!(!has_duplicates(catalog.rooms()));
        // squares are rotation invariant, the long hall has two orientations,
        // both t rooms and the u turn have four, and the left and right turns
        // share the same four between them
        assert_eq!(catalog.len(), 2 + 2 + 3 * 4 + 4);
        assert!(catalog.get("long hall r90").is_some());
        assert!(catalog.get("long hall r180").is_none());
        assert!(catalog.get("small square r90").is_none());
        assert!(catalog.get("left turn r270").is_none());
        assert!(catalog.get("right turn r90").is_none());
    }

    #[test]
    fn test_rotation_expansion_is_idempotent() {
        let mut once = PrefabCatalog::default();
        once.add_rotated_prefabs();
        let mut twice = once.clone();
        twice.add_rotated_prefabs();
        assert_eq!(once, twice);
        assert!(!has_duplicates(twice.rooms()));
    }

    #[test]
    fn test_candidates_filter() {
        let mut catalog = PrefabCatalog::default();
        catalog.add_rotated_prefabs();
        let active = Door::new(240, 10, North);
        let failed = vec!["long hall".to_string()];
        let names: Vec<&str> = catalog
            .candidates("small square", &active, &failed)
            .map(|room| room.name.as_str())
            .collect();
        assert!(!names.is_empty());
        assert!(!names.contains(&"small square"));
        assert!(!names.contains(&"long hall"));
        assert!(names.contains(&"t shaped"));
        assert!(names.contains(&"u turn"));
        for name in names {
            assert!(catalog.get(name).unwrap().has_direction(South));
        }
    }

    #[test]
    fn test_default_start_room() {
        let start = default_start_room();
        assert_eq!((start.x, start.y, start.w, start.h), (230, 0, 20, 10));
        assert_eq!(start.get_door(0), Some(Door::new(240, 10, North)));
    }

    #[test]
    fn test_finish_room_opens_every_way() {
        let finish = finish_room();
        for direction in Direction::ALL {
            assert!(finish.has_direction(direction));
        }
        assert_eq!((finish.w, finish.h), (20, 20));
    }

    #[test]
    fn test_rejects_empty_and_doorless() {
        assert!(matches!(PrefabCatalog::new(vec![]), Err(GeneratorError::EmptyCatalog)));
        let err = PrefabCatalog::new(vec![Room::new(5, 5, "closet", vec![])]).unwrap_err();
        assert!(matches!(err, GeneratorError::DoorlessPrefab(name) if name == "closet"));
    }

    #[test]
    fn test_catalog_from_json() {
        let catalog = PrefabCatalog::from_json_str(
            r#"[{ "name": "hall", "w": 10, "h": 50,
                  "doors": [{ "x": 5, "y": 0, "d": "S" }, { "x": 5, "y": 50, "d": "N" }] }]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rooms()[0].name, "hall");
    }
}
