// src/gui/components/data_table.rs
//
// Draws the live course table from `app.row_ix`. Purely a view; the only
// write is the clicked row becoming the selection.

use std::sync::Arc;

use eframe::egui::{self, Align, Layout, RichText, Sense, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::data::duration_display;
use crate::gui::app::App;

const HEADERS: [&str; 6] = ["Title", "Domain", "Platform", "Level", "Format", "Duration"];
const WIDTHS: [f32; 6] = [280.0, 160.0, 120.0, 90.0, 110.0, 90.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.row_ix.is_empty() {
        ui.add_space(12.0);
        ui.label("No courses match your filters. Try widening your search.");
        return;
    }

    // Match the scroll bar aesthetics used in the side panels
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let cat = Arc::clone(&app.catalogue);
    let row_ix = &app.row_ix;
    let selected = app.state.gui.selected_id;
    let mut clicked: Option<usize> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(Sense::click())
        .min_scrolled_height(0.0)
        .id_salt("course_table");
    for (i, w) in WIDTHS.iter().enumerate() {
        let col = Column::initial(*w).resizable(true).clip(true).at_least(40.0);
        table = table.column(if i == 0 { col.at_least(120.0) } else { col });
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, row_ix.len(), |mut row| {
                let Some(rec) = row_ix.get(row.index()).and_then(|&ix| cat.get(ix)) else {
                    return;
                };
                row.set_selected(selected == Some(rec.id));

                let cells = [
                    rec.title.as_str(),
                    rec.domain.as_str(),
                    rec.platform.as_str(),
                    rec.level.as_str(),
                    rec.format.as_str(),
                ];
                for text in cells {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                        ui.label(text);
                    });
                }
                row.col(|ui| {
                    let rt = if rec.has_duration() {
                        RichText::new(duration_display(rec))
                    } else {
                        RichText::new(duration_display(rec)).weak()
                    };
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                });

                if row.response().clicked() {
                    clicked = Some(rec.id);
                }
            });
        });

    if let Some(id) = clicked {
        logd!("UI: Selected record {}", id);
        app.state.gui.selected_id = Some(id);
    }
}
