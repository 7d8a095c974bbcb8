// src/ui/status_bar.rs

use std::sync::Arc;
use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::ui::viewer::Viewer;

pub struct StatusBar {
    viewer: Arc<RwLock<Viewer>>,
}

impl StatusBar {
    pub fn new(viewer: Arc<RwLock<Viewer>>) -> Self {
        Self { viewer }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let viewer = self.viewer.read(); // Keep the read lock short.

            let progress = match viewer.dungeon() {
                Some(dungeon) => format!("{}/{}", viewer.revealed().min(dungeon.len()), dungeon.len()),
                None => String::new(),
            };

            ui.horizontal(|ui| {
                ui.label(&viewer.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Rooms: {}", progress));
                });
            });
        });
    }
}
