// src/gui/actions/copy.rs
use eframe::egui;

use crate::{file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.row_ix.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let result = {
        let view = app.view();
        logf!("Copy: rows={}, format={:?}", view.len(), app.state.options.export.format);
        file::to_export_string(&app.state.options.export, &view)
    };

    match result {
        Ok(txt) => {
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.status(format!("Copy error: {e}"));
        }
    }
}
