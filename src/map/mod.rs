// src/map/mod.rs
pub mod door;
pub mod edge;
pub mod room;

pub use door::{Direction, Door};
pub use edge::{Edge, Orientation};
pub use room::Room;
