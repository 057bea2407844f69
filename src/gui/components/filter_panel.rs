// src/gui/components/filter_panel.rs
//
// Left panel: every filter widget, driven by `app.facets`.
// Returns true when any filter changed so the caller rebuilds the view.

use eframe::egui;

use crate::gui::app::App;

/// Checkbox list for one facet. Selection order follows the option order.
fn multi_select(
    ui: &mut egui::Ui,
    label: &str,
    options: &[String],
    selected: &mut Vec<String>,
) -> bool {
    if options.is_empty() {
        return false;
    }
    let mut changed = false;
    let title = if selected.is_empty() {
        s!(label)
    } else {
        format!("{label} ({})", selected.len())
    };

    egui::CollapsingHeader::new(title)
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui| {
            for opt in options {
                let mut on = selected.contains(opt);
                if ui.checkbox(&mut on, opt.as_str()).changed() {
                    if on {
                        selected.push(opt.clone());
                    } else {
                        selected.retain(|s| s != opt);
                    }
                    changed = true;
                }
            }
        });
    changed
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) -> bool {
    let mut changed = false;

    ui.heading("Filters");
    ui.add_space(4.0);

    let filters = &mut app.state.gui.filters;
    let facets = &app.facets;

    ui.label("Search");
    changed |= ui
        .add(
            egui::TextEdit::singleline(&mut filters.search)
                .hint_text("Title or description"),
        )
        .changed();

    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("filter_panel_scroll")
        .show(ui, |ui| {
            changed |= multi_select(ui, "Domain", &facets.domains, &mut filters.domains);
            changed |= multi_select(ui, "Skill area", &facets.skills, &mut filters.skills);
            changed |= multi_select(ui, "Level", &facets.levels, &mut filters.levels);
            changed |= multi_select(ui, "Format", &facets.formats, &mut filters.formats);
            changed |= multi_select(ui, "Journey stage", &facets.journey_stages, &mut filters.journey_stages);
            changed |= multi_select(ui, "Platform", &facets.platforms, &mut filters.platforms);

            ui.separator();

            // Offered only when the catalogue has a real spread of durations.
            if let Some((min, max)) = facets.duration_range {
                let mut limit = filters.duration.is_some();
                if ui.checkbox(&mut limit, "Limit duration (hours)").changed() {
                    filters.duration = limit.then_some((min, max));
                    changed = true;
                }
                if let Some((lo, hi)) = filters.duration.as_mut() {
                    changed |= ui.add(egui::Slider::new(&mut *lo, min..=max).text("min").step_by(0.5)).changed();
                    changed |= ui.add(egui::Slider::new(&mut *hi, min..=max).text("max").step_by(0.5)).changed();
                    if *lo > *hi {
                        std::mem::swap(lo, hi);
                    }
                    ui.small("Courses without a duration are always shown.");
                }
            }

            changed |= ui
                .checkbox(&mut filters.show_without_link, "Show courses without a link")
                .changed();

            ui.add_space(8.0);
            if ui.button("Clear filters").clicked() && !filters.is_default() {
                filters.clear();
                changed = true;
            }
        });

    if changed {
        logd!("UI: Filters changed → {:?}", app.state.gui.filters);
    }
    changed
}
