// src/generator/mod.rs
pub mod catalog;
pub mod config;
pub mod engine;
mod error;
pub mod goal;
pub mod overlap;

pub use catalog::{default_prefabs, default_start_room, finish_room, start_room, PrefabCatalog};
pub use config::GeneratorConfig;
pub use engine::{build, rebuild, Dungeon, Generator, PathEntry};
pub use error::{GeneratorError, Result};

/// Name that marks the last room of every path.
pub const FINISH_NAME: &str = "finish";
pub const START_NAME: &str = "start";
/// Side length of the square finish room.
pub const FINISH_SIZE: i32 = 20;
/// Goals are sampled this far short of the top and right grid borders.
pub const GOAL_MARGIN: i32 = 10;
pub const DEFAULT_GRID_SIZE: i32 = 500;
