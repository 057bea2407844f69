// src/gui/app.rs
use std::{error::Error, sync::Arc};

use eframe::egui;

use crate::{
    catalogue::{Catalogue, CatalogueCache, NormalizedRecord},
    config::{
        consts::{DETAIL_PANEL_WIDTH, FILTER_PANEL_WIDTH},
        state::{AppState, Tab},
    },
    data::{CatalogueView, Facets},
    tutors::{self, TutorTable},
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Course Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // canonical data: shared, never mutated in place
    pub cache: CatalogueCache,
    pub catalogue: Arc<Catalogue>,
    pub facets: Facets,
    pub tutors: TutorTable,

    // visible rows (positions into `catalogue`), filtered + sorted
    pub row_ix: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let cache = CatalogueCache::new(state.options.durations);
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            cache,
            catalogue: Arc::new(Catalogue::default()),
            facets: Facets::default(),
            tutors: TutorTable::empty(),
            row_ix: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: s!("Idle"),
        };
        app.load_sources();
        logf!(
            "Init: records={}, tutors={}, visible={}",
            app.catalogue.len(),
            app.tutors.len(),
            app.row_ix.len()
        );
        app
    }

    /// (Re)read catalogue and tutors. The cache decides whether the
    /// catalogue actually needs parsing again.
    pub fn load_sources(&mut self) {
        let sources = self.state.options.sources.clone();

        match self.cache.get_or_load(&sources.catalogue) {
            Ok(cat) => {
                self.status = format!("Loaded {} courses from {}", cat.len(), sources.catalogue.display());
                // Ids are positions; after a re-parse they may name other courses.
                if !Arc::ptr_eq(&cat, &self.catalogue) {
                    self.state.gui.selected_id = None;
                    self.facets = Facets::from_catalogue(&cat);
                    self.catalogue = cat;
                }
            }
            Err(e) => {
                loge!("Load: {}", e);
                self.status = format!("Could not load catalogue: {e}");
            }
        }

        self.tutors = match tutors::load_tutors(&sources.tutors) {
            Ok(t) => t,
            Err(e) => {
                loge!("Tutors: {}", e);
                TutorTable::empty()
            }
        };

        self.rebuild_view();
    }

    /// Re-apply filters + sort. Drops the selection if it is no longer visible.
    pub fn rebuild_view(&mut self) {
        let gui = &self.state.gui;
        self.row_ix = CatalogueView::new(&self.catalogue, &gui.filters, gui.sort).row_ix;

        if let Some(id) = self.state.gui.selected_id {
            if !self.row_ix.contains(&id) {
                self.state.gui.selected_id = None;
            }
        }
        logd!("View: {} of {} visible", self.row_ix.len(), self.catalogue.len());
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn view(&self) -> CatalogueView<'_> {
        CatalogueView::from_indices(&self.catalogue, self.row_ix.clone())
    }

    #[inline]
    pub fn selected(&self) -> Option<&NormalizedRecord> {
        self.state.gui.selected_id.and_then(|id| self.catalogue.get(id))
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("stats").show(ctx, |ui| {
            components::stats_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::SidePanel::left("filters")
            .default_width(FILTER_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                if components::filter_panel::draw(ui, self) {
                    self.rebuild_view();
                }
            });

        egui::SidePanel::right("detail")
            .default_width(DETAIL_PANEL_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                components::detail_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();

            match self.state.gui.tab {
                Tab::Courses => components::data_table::draw(ui, self),
                Tab::Tutors => components::tutor_table::draw(ui, self),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::config::options::AppOptions;

    const FIRST: &str = "Resource title,Platform / host\nAlpha,edX\nBeta,Udemy\n";
    const SECOND: &str = "Resource title,Platform / host\nGamma,edX\nAlpha,edX\nBeta,Udemy\n";

    fn app_for(dir: &std::path::Path) -> App {
        let mut options = AppOptions::default();
        options.sources.catalogue = dir.join("catalogue.csv");
        options.sources.tutors = dir.join("tutors.csv");
        App::new(AppState::with_options(options))
    }

    #[test]
    fn unchanged_reload_keeps_selection() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("catalogue.csv"), FIRST).unwrap();
        let mut app = app_for(dir.path());

        app.state.gui.selected_id = Some(1);
        app.load_sources();
        assert_eq!(app.selected().map(|r| r.title.as_str()), Some("Beta"));
    }

    #[test]
    fn changed_reload_clears_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalogue.csv");
        fs::write(&path, FIRST).unwrap();
        let mut app = app_for(dir.path());

        app.state.gui.selected_id = Some(1);
        fs::write(&path, SECOND).unwrap();
        app.load_sources();

        assert_eq!(app.catalogue.len(), 3);
        assert_eq!(app.state.gui.selected_id, None);
        assert!(app.selected().is_none());
    }
}
