// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::ViewportBuilder;
use offerings_browser::{
    config::{consts::CONFIG_FILE, options::AppOptions, state::GuiState},
    gui,
};

fn main() {
    let options = AppOptions::load_or_default(Path::new(CONFIG_FILE));
    let size = GuiState::default();

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Offerings")
            .with_inner_size([size.window_w, size.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
