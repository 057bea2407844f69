// src/gui/components/stats_bar.rs

use eframe::egui::{self, RichText};

use crate::config::consts::TOP_SKILL_LABEL_CHARS;
use crate::data::Stats;
use crate::gui::app::App;

fn card(ui: &mut egui::Ui, value: String, label: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(value).heading().strong());
        ui.small(label);
    });
    ui.separator();
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let stats = Stats::compute(&app.view());

    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        card(ui, stats.total.to_string(), "Total Courses");
        card(ui, stats.domains.to_string(), "Domains");
        card(ui, stats.platforms.to_string(), "Platforms");
        card(ui, stats.visible.to_string(), "Showing Now");
        card(ui, format!("{}/{}", stats.with_duration, stats.total), "With Duration");

        ui.vertical(|ui| {
            ui.small("Top Skill Areas");
            ui.horizontal_wrapped(|ui| {
                for (tag, n) in &stats.top_skills {
                    let short: String = tag.chars().take(TOP_SKILL_LABEL_CHARS).collect();
                    ui.label(RichText::new(short).small()).on_hover_text(format!("{tag} ({n})"));
                }
            });
        });
    });

    let avg = stats
        .avg_duration
        .map(|h| format!("{h:.1} hours"))
        .unwrap_or_else(|| s!("N/A"));
    ui.horizontal(|ui| {
        ui.small(format!("Avg duration: {avg}"));
        ui.separator();
        ui.small(format!("Most common platform: {}", stats.top_platform.as_deref().unwrap_or("N/A")));
        ui.separator();
        ui.small(format!("Most common level: {}", stats.top_level.as_deref().unwrap_or("N/A")));
    });
    ui.add_space(4.0);
}
