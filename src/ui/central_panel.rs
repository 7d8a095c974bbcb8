//! Central panel UI module: fits the grid to the available area, handles zoom,
//! and paints the dungeon through the [`Renderer`] contract.

use std::sync::Arc;

use eframe::egui::{self, Color32, Context, Painter, Pos2, Rect, Sense, Stroke, Vec2};
use parking_lot::RwLock;

use crate::map::Room;
use crate::render::{self, Palette, Renderer};
use crate::ui::viewer::Viewer;
use crate::utils::Point2D;

const BORDER: f32 = 10.0;
const ROOM_EDGE_COLOR: Color32 = Color32::from_rgb(245, 164, 2);
const DOOR_COLOR: Color32 = Color32::from_rgb(0, 0, 255);

fn palette_color(color: Palette) -> Color32 {
    match color {
        Palette::Start | Palette::Preview => Color32::from_rgb(0, 255, 0),
        Palette::Room => Color32::from_rgb(249, 252, 28),
        Palette::Finish => Color32::from_rgb(255, 0, 0),
        Palette::Goal => Color32::from_rgb(252, 3, 223),
        Palette::Doorway => DOOR_COLOR,
    }
}

/// Draws onto an egui painter, flipping the grid so `y` grows upward.
struct PainterRenderer<'a> {
    painter: &'a Painter,
    origin: Pos2,
    scale: f32,
}

impl<'a> PainterRenderer<'a> {
    fn to_screen(&self, point: Point2D) -> Pos2 {
        Pos2::new(
            self.origin.x + point.x as f32 * self.scale,
            self.origin.y - point.y as f32 * self.scale,
        )
    }
}

impl<'a> Renderer for PainterRenderer<'a> {
    fn draw_room(&mut self, room: &Room, color: Palette) {
        let rect = Rect::from_two_pos(
            self.to_screen(Point2D::new(room.x, room.y)),
            self.to_screen(Point2D::new(room.x + room.w, room.y + room.h)),
        );
        self.painter
            .rect(rect, 0.0, palette_color(color), Stroke::new(2.0, ROOM_EDGE_COLOR));

        let door_size = Vec2::splat((4.0 * self.scale).max(2.0));
        for i in 0..room.doors.len() {
            if let Some(door) = room.get_door(i) {
                let center = self.to_screen(door.position());
                self.painter
                    .rect_filled(Rect::from_center_size(center, door_size), 0.0, DOOR_COLOR);
            }
        }
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, color: Palette) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(2.0, palette_color(color)),
        );
    }
}

pub struct CentralPanel {
    viewer: Arc<RwLock<Viewer>>,
    /// Zoom on top of the fit-to-window scale.
    zoom: f32,
}

impl CentralPanel {
    pub fn new(viewer: Arc<RwLock<Viewer>>) -> Self {
        Self { viewer, zoom: 1.0 }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::WHITE))
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                let response = ui.interact(rect, ui.id(), Sense::hover());
                if response.hovered() && ui.input().scroll_delta.y.abs() > 0.0 {
                    let factor = 1.0 + ui.input().scroll_delta.y * 0.001;
                    self.zoom = (self.zoom * factor).clamp(0.25, 8.0);
                }

                let painter = ui.painter_at(rect);
                let viewer = self.viewer.read();
                let (grid_w, grid_h) = viewer.generator().grid_size();
                let fit = ((rect.width() - 2.0 * BORDER) / grid_w as f32)
                    .min((rect.height() - 2.0 * BORDER) / grid_h as f32)
                    .max(0.01);
                let scale = fit * self.zoom;

                let origin = Pos2::new(rect.left() + BORDER, rect.bottom() - BORDER);
                let grid_rect = Rect::from_two_pos(
                    origin,
                    Pos2::new(origin.x + grid_w as f32 * scale, origin.y - grid_h as f32 * scale),
                );
                painter.rect_filled(grid_rect, 0.0, Color32::BLACK);

                let mut renderer = PainterRenderer {
                    painter: &painter,
                    origin,
                    scale,
                };
                if viewer.show_prefabs {
                    render::render_catalog(viewer.generator().prefabs(), &mut renderer);
                } else if let Some(dungeon) = viewer.dungeon() {
                    render::render_path(&dungeon.path, viewer.revealed(), &mut renderer);
                    if viewer.fully_revealed() {
                        renderer.draw_room(&render::goal_marker(dungeon.goal), Palette::Goal);
                    }
                }
            });
    }
}
