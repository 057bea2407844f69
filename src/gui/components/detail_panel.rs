// src/gui/components/detail_panel.rs
//
// Right panel: everything about the selected course.

use std::sync::Arc;

use eframe::egui::{self, RichText};

use crate::catalogue::NormalizedRecord;
use crate::config::state::Tab;
use crate::data::{detail_outcomes, detail_prerequisites, detail_skills, duration_display};
use crate::gui::app::App;

fn meta_grid(ui: &mut egui::Ui, rec: &NormalizedRecord) {
    let duration = duration_display(rec);
    let rows: [(&str, &str); 8] = [
        ("Domain", rec.domain.as_str()),
        ("Focus area", rec.focus_area.as_str()),
        ("Platform", rec.platform.as_str()),
        ("Type", rec.resource_type.as_str()),
        ("Level", rec.level.as_str()),
        ("Format", rec.format.as_str()),
        ("Journey stage", rec.journey_stage.as_str()),
        ("Duration", duration.as_str()),
    ];

    egui::Grid::new("detail_meta")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            for (k, v) in rows {
                if v.is_empty() {
                    continue;
                }
                ui.label(RichText::new(k).weak());
                ui.label(v);
                ui.end_row();
            }
            if let Some(a) = rec.audience.as_deref().filter(|a| !a.trim().is_empty()) {
                ui.label(RichText::new("Audience").weak());
                ui.label(a.trim());
                ui.end_row();
            }
        });
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cat = Arc::clone(&app.catalogue);
    let Some(rec) = app.state.gui.selected_id.and_then(|id| cat.get(id)) else {
        ui.add_space(12.0);
        ui.weak("Select a course to see its details.");
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("detail_scroll")
        .show(ui, |ui| {
            ui.heading(rec.title.as_str());
            ui.add_space(6.0);
            meta_grid(ui, rec);

            if let Some(text) = detail_outcomes(rec) {
                ui.add_space(8.0);
                ui.strong("Learning outcomes");
                ui.label(text);
            }

            if let Some(text) = detail_prerequisites(rec) {
                ui.add_space(8.0);
                ui.strong("Prerequisites");
                ui.label(text);
            }

            let skills = detail_skills(rec);
            if !skills.is_empty() {
                ui.add_space(8.0);
                ui.strong("Skills");
                let bg = ui.visuals().faint_bg_color;
                ui.horizontal_wrapped(|ui| {
                    for s in skills {
                        ui.label(RichText::new(s).small().background_color(bg));
                    }
                });
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                match rec.link() {
                    Some(url) => { ui.hyperlink_to("Open course", url); }
                    None => { ui.weak("No link available"); }
                }
                if !rec.focus_area.is_empty() && ui.button("Find tutors").clicked() {
                    app.state.gui.tab = Tab::Tutors;
                    app.state.gui.tutors_for_selection = true;
                }
            });
        });
}
