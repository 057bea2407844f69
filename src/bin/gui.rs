// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use course_explorer::{
    config::{self, consts::{CONFIG_FILE, STORE_DIR}, state::AppState},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(Path::new(STORE_DIR), false);

    let options = match config::load_options(Path::new(CONFIG_FILE)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error ({CONFIG_FILE}): {e}; using defaults");
            Default::default()
        }
    };
    let state = AppState::with_options(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Course Explorer")
            .with_inner_size([state.gui.window_w, state.gui.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
