// src/gui/components/tutor_table.rs

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::tutors::TutorRecord;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.tutors.is_empty() {
        ui.add_space(12.0);
        ui.label(format!(
            "No tutors available. Add {} to enable tutor matching.",
            app.state.options.sources.tutors.display()
        ));
        return;
    }

    let focus = app.selected().map(|r| r.focus_area.clone()).unwrap_or_default();

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!focus.is_empty(), |ui| {
            ui.checkbox(&mut app.state.gui.tutors_for_selection, "Only tutors for the selected focus area");
        });
        if !focus.is_empty() {
            ui.weak(format!("Focus: {focus}"));
        }
    });
    ui.separator();

    let only_matching = app.state.gui.tutors_for_selection && !focus.is_empty();
    let list: Vec<&TutorRecord> = if only_matching {
        app.tutors.matching(&focus).collect()
    } else {
        app.tutors.tutors.iter().collect()
    };

    if list.is_empty() {
        ui.label(format!("No tutors currently list \"{focus}\" as an expertise."));
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .id_salt("tutor_table")
        .column(Column::initial(160.0).resizable(true).clip(true))
        .column(Column::initial(260.0).resizable(true).clip(true))
        .column(Column::initial(160.0).resizable(true).clip(true))
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for h in ["Name", "Expertise", "Availability", "Booking"] {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(20.0, list.len(), |mut row| {
                let Some(t) = list.get(row.index()) else { return };
                row.col(|ui| { ui.label(t.name.as_str()); });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.label(t.expertise.join(", "));
                });
                row.col(|ui| { ui.label(t.availability.as_str()); });
                row.col(|ui| {
                    if t.booking_link.is_empty() {
                        ui.weak("—");
                    } else {
                        ui.hyperlink_to("Book", t.booking_link.as_str());
                    }
                });
            });
        });
}
