//! # Render Module
//!
//! The generator never draws anything itself. Front ends implement
//! [`Renderer`], which only needs to draw a room and a line, and hand it to
//! [`render_dungeon`] or [`render_catalog`].
//!
//! Coordinates passed to a renderer are grid coordinates with the origin at
//! the bottom-left corner; flipping to screen space is the renderer's job.

pub mod ascii;

use log::debug;

use crate::generator::{Dungeon, PathEntry, PrefabCatalog, FINISH_NAME, GOAL_MARGIN, START_NAME};
use crate::map::Room;
use crate::utils::Point2D;

pub use ascii::AsciiCanvas;

/// What a shape represents; renderers map these to their own colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Start,
    Room,
    Finish,
    Goal,
    Preview,
    Doorway,
}

pub trait Renderer {
    fn draw_room(&mut self, room: &Room, color: Palette);
    fn draw_line(&mut self, from: Point2D, to: Point2D, color: Palette);
}

pub fn room_palette(room: &Room) -> Palette {
    match room.name.as_str() {
        START_NAME => Palette::Start,
        FINISH_NAME => Palette::Finish,
        _ => Palette::Room,
    }
}

/// Marker drawn where the goal lies. The goal is not part of the dungeon.
pub fn goal_marker(goal: Point2D) -> Room {
    Room::at(goal.x, goal.y, GOAL_MARGIN, GOAL_MARGIN, "goal", Vec::new())
}

/// Draws the first `count` rooms of the path with the doorways joining them.
/// Used for the room-by-room reveal.
pub fn render_path<R: Renderer + ?Sized>(path: &[PathEntry], count: usize, renderer: &mut R) {
    let shown = &path[..count.min(path.len())];
    for entry in shown {
        renderer.draw_room(&entry.room, room_palette(&entry.room));
    }
    for pair in shown.windows(2) {
        let next = &pair[1].room;
        if let Some(entrance) = next.entrance.and_then(|i| next.get_door(i)) {
            renderer.draw_line(pair[0].door.position(), entrance.position(), Palette::Doorway);
        }
    }
    debug!(target: "render", "rendered {} of {} rooms", shown.len(), path.len());
}

/// Draws the whole dungeon followed by the goal marker.
pub fn render_dungeon<R: Renderer + ?Sized>(dungeon: &Dungeon, renderer: &mut R) {
    render_path(&dungeon.path, dungeon.path.len(), renderer);
    renderer.draw_room(&goal_marker(dungeon.goal), Palette::Goal);
}

/// Copies of the catalog templates laid out in rows of five, 100 units apart,
/// for previewing.
pub fn catalog_layout(catalog: &PrefabCatalog) -> Vec<Room> {
    let (mut x, mut y) = (10, 10);
    let mut rooms = Vec::with_capacity(catalog.len());
    for template in catalog.rooms() {
        let mut room = template.clone();
        room.x = x;
        room.y = y;
        rooms.push(room);
        if x > 400 {
            x = 10;
            y += 100;
        } else {
            x += 100;
        }
    }
    rooms
}

pub fn render_catalog<R: Renderer + ?Sized>(catalog: &PrefabCatalog, renderer: &mut R) {
    for room in catalog_layout(catalog) {
        renderer.draw_room(&room, Palette::Preview);
    }
}

/// One line per path entry: room name, origin and exit door.
pub fn path_summary(path: &[PathEntry]) -> String {
    let lines: String = path
        .iter()
        .map(|entry| {
            format!(
                "({}, {}, {}, {})\n",
                entry.room.name, entry.room.x, entry.room.y, entry.door
            )
        })
        .collect();
    format!("Path:\n{}", lines)
}
