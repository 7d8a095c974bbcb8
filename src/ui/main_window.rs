//! # Main Window Module
//!
//! Hosts the dungeon viewer using eframe/egui:
//! - A left side panel with generation controls and tunables.
//! - A central canvas drawing the dungeon room by room.
//! - A bottom status bar with build time and reveal progress.
//!
//! Enter or Space throws the dungeon away and grows a new one from the same
//! generator.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use eframe::egui;
use parking_lot::RwLock;

use crate::generator::Generator;
use crate::ui::central_panel::CentralPanel;
use crate::ui::side_panel::SidePanel;
use crate::ui::status_bar::StatusBar;
use crate::ui::viewer::Viewer;

pub struct MainWindow {
    viewer: Arc<RwLock<Viewer>>,
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
}

impl MainWindow {
    pub fn new(generator: Generator, reveal_interval: Duration) -> Self {
        let viewer = Arc::new(RwLock::new(Viewer::new(generator, reveal_interval)));
        MainWindow {
            side_panel: SidePanel::new(viewer.clone()),
            central_panel: CentralPanel::new(viewer.clone()),
            status_bar: StatusBar::new(viewer.clone()),
            viewer,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let regenerate = {
            let input = ctx.input();
            input.key_pressed(egui::Key::Enter) || input.key_pressed(egui::Key::Space)
        };
        if regenerate {
            self.viewer.write().regenerate();
        }
        if ctx.input().key_pressed(egui::Key::Tab) {
            self.side_panel.show_side_panel = !self.side_panel.show_side_panel;
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        let (pending, interval) = {
            let mut viewer = self.viewer.write();
            (viewer.tick(), viewer.reveal_interval)
        };

        self.side_panel.update(ctx);
        self.status_bar.update(ctx);
        self.central_panel.update(ctx);

        if pending {
            ctx.request_repaint_after(interval);
        }
    }
}

/// Opens the viewer window and blocks until it is closed.
pub fn run_main_window(generator: Generator, reveal_interval: Duration) -> Result<(), Box<dyn Error>> {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(760.0, 560.0)),
        ..Default::default()
    };
    let window = MainWindow::new(generator, reveal_interval);
    eframe::run_native(
        "Dungeon Generator",
        native_options,
        Box::new(move |_cc| Box::new(window)),
    );
    // run_native returns () so we simply return Ok.
    Ok(())
}
