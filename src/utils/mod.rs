// src/utils/mod.rs
pub mod geometry;

pub use geometry::Point2D;
