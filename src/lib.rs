// src/lib.rs

pub mod generator;
pub mod map;
pub mod render;
#[cfg(feature = "gui")]
pub mod ui;
pub mod utils;
