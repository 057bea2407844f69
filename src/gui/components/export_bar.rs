// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            for f in [ExportFormat::Csv, ExportFormat::Tsv] {
                ui.selectable_value(&mut fmt, f, f.label());
            }

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            // Untouched text field follows the new extension.
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(360.0))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        // --- Actions (Copy / Export / Reload) ---
        if ui.button("Copy").on_hover_text("Copy visible rows to the clipboard").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").on_hover_text("Write visible rows to the output file").clicked() {
            actions::export(app);
        }
        if ui.button("Reload").on_hover_text("Re-read the catalogue and tutor files").clicked() {
            actions::reload(app);
        }
    });

    ui.separator();
    ui.label(app.status.as_str());
    ui.add_space(2.0);
}
