// src/ui/side_panel.rs

use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Context, Ui};
use parking_lot::RwLock;

use crate::ui::viewer::Viewer;

/// Left panel with the generation controls and the active tunables.
pub struct SidePanel {
    viewer: Arc<RwLock<Viewer>>,
    pub show_side_panel: bool,
}

impl SidePanel {
    pub fn new(viewer: Arc<RwLock<Viewer>>) -> Self {
        Self {
            viewer,
            show_side_panel: true,
        }
    }

    pub fn update(&mut self, ctx: &Context) {
        if !self.show_side_panel {
            return;
        }

        egui::SidePanel::left("controls_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.show_controls(ui);
                ui.separator();
                self.show_config(ui);
            });
    }

    fn show_controls(&self, ui: &mut Ui) {
        ui.heading("Dungeon");
        let mut viewer = self.viewer.write();

        if ui.button("New dungeon (Enter)").clicked() {
            viewer.regenerate();
        }
        ui.checkbox(&mut viewer.show_prefabs, "Show prefabs");

        let mut seconds = viewer.reveal_interval.as_secs_f32();
        if ui
            .add(egui::Slider::new(&mut seconds, 0.0..=1.0).text("Reveal (s)"))
            .changed()
        {
            viewer.reveal_interval = Duration::from_secs_f32(seconds);
        }
    }

    fn show_config(&self, ui: &mut Ui) {
        ui.heading("Tunables");
        let viewer = self.viewer.read();
        let generator = viewer.generator();
        let config = generator.config();

        egui::Grid::new("config_grid").num_columns(2).show(ui, |ui| {
            let mut row = |label: &str, value: String| {
                ui.label(label);
                ui.label(value);
                ui.end_row();
            };
            row("Seed", generator.seed().to_string());
            row("Prefabs", generator.prefabs().len().to_string());
            row("Finish threshold", format!("{:.2}", config.finish_threshold));
            row("Room random", format!("{:.2}", config.room_random));
            row("Door random", format!("{:.2}", config.door_random));
            row("Path length", config.path_length.to_string());
            row("Allowed fails", config.allowed_fails.to_string());
        });

        if let Some(goal) = generator.goal() {
            ui.label(format!("Goal: ({}, {})", goal.x, goal.y));
        }
    }
}
