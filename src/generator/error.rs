// src/generator/error.rs

use thiserror::Error;

use crate::map::Direction;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("grid {width}x{height} is too small, need at least {needed_width}x{needed_height}")]
    GridTooSmall {
        width: i32,
        height: i32,
        needed_width: i32,
        needed_height: i32,
    },

    #[error("start room '{0}' does not fit inside the grid")]
    StartOutOfBounds(String),

    #[error("start room '{0}' has no door to grow from")]
    StartWithoutDoor(String),

    #[error("no goal in the grid can be {threshold} of the grid away from the start")]
    UnreachableGoal { threshold: f64 },

    #[error("prefab catalog is empty")]
    EmptyCatalog,

    #[error("prefab '{0}' has no doors")]
    DoorlessPrefab(String),

    #[error("no prefab can attach to '{room}' through a {direction} door")]
    NoCandidateRoom { room: String, direction: Direction },

    #[error("generation stopped after {0} iterations")]
    IterationLimit(usize),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
