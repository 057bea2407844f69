// src/gui/components/tabs.rs
//
// Top tabs + the sort selector that applies to the Courses tab.

use eframe::egui;

use crate::config::state::Tab;
use crate::data::SortMode;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.tab;
        for tab in Tab::ALL {
            let selected = tab == cur;
            let label = match tab {
                Tab::Courses => format!("{} ({})", tab.label(), app.row_ix.len()),
                Tab::Tutors => format!("{} ({})", tab.label(), app.tutors.len()),
            };
            if ui.selectable_label(selected, label).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, tab);
                app.state.gui.tab = tab;
            }
        }

        if app.state.gui.tab != Tab::Courses {
            return;
        }

        ui.separator();
        ui.label(format!("Showing {} of {}", app.row_ix.len(), app.catalogue.len()));

        let prev = app.state.gui.sort;
        let mut sort = prev;
        egui::ComboBox::from_id_salt("sort_mode")
            .selected_text(sort.label())
            .show_ui(ui, |ui| {
                for mode in SortMode::ALL {
                    ui.selectable_value(&mut sort, mode, mode.label());
                }
            });
        if sort != prev {
            logf!("UI: Sort → {:?}", sort);
            app.state.gui.sort = sort;
            app.rebuild_view();
        }
    });
}
