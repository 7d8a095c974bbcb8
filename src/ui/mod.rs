// src/ui/mod.rs
pub mod central_panel;
pub mod main_window;
pub mod side_panel;
pub mod status_bar;
pub mod viewer;

pub use main_window::{run_main_window, MainWindow};
pub use viewer::Viewer;
