// src/render/ascii.rs

use std::fmt;

use crate::map::Room;
use crate::render::{Palette, Renderer};
use crate::utils::Point2D;

/// A character grid renderer for terminals. Each cell covers `scale` grid
/// units on both axes.
pub struct AsciiCanvas {
    columns: usize,
    rows: usize,
    scale: i32,
    cells: Vec<char>,
}

impl AsciiCanvas {
    pub fn new(grid_width: i32, grid_height: i32, scale: i32) -> Self {
        let scale = scale.max(1);
        let columns = (grid_width / scale + 1).max(1) as usize;
        let rows = (grid_height / scale + 1).max(1) as usize;
        AsciiCanvas {
            columns,
            rows,
            scale,
            cells: vec![' '; columns * rows],
        }
    }

    fn glyph(color: Palette) -> char {
        match color {
            Palette::Start => 'S',
            Palette::Room => '#',
            Palette::Finish => 'F',
            Palette::Goal => '*',
            Palette::Preview => '+',
            Palette::Doorway => '.',
        }
    }

    fn cell_of(&self, point: Point2D) -> (usize, usize) {
        let col = (point.x / self.scale).clamp(0, self.columns as i32 - 1) as usize;
        let row = (point.y / self.scale).clamp(0, self.rows as i32 - 1) as usize;
        (col, row)
    }

    fn plot(&mut self, point: Point2D, glyph: char) {
        let (col, row) = self.cell_of(point);
        self.cells[row * self.columns + col] = glyph;
    }

    /// Character at a grid point, for inspection.
    pub fn glyph_at(&self, point: Point2D) -> char {
        let (col, row) = self.cell_of(point);
        self.cells[row * self.columns + col]
    }
}

impl Renderer for AsciiCanvas {
    fn draw_room(&mut self, room: &Room, color: Palette) {
        let glyph = Self::glyph(color);
        let step = self.scale;
        let mut y = room.y;
        while y <= room.y + room.h {
            let mut x = room.x;
            while x <= room.x + room.w {
                self.plot(Point2D::new(x, y), glyph);
                x += step;
            }
            y += step;
        }
        for i in 0..room.doors.len() {
            if let Some(door) = room.get_door(i) {
                self.plot(door.position(), 'o');
            }
        }
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, color: Palette) {
        let glyph = Self::glyph(color);
        let steps = ((to.x - from.x).abs().max((to.y - from.y).abs()) / self.scale).max(1);
        for i in 0..=steps {
            let x = from.x + (to.x - from.x) * i / steps;
            let y = from.y + (to.y - from.y) * i / steps;
            self.plot(Point2D::new(x, y), glyph);
        }
    }
}

/// Rows are printed top to bottom, so the highest `y` comes first.
impl fmt::Display for AsciiCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            let line: String = self.cells[row * self.columns..(row + 1) * self.columns]
                .iter()
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
