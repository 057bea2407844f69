// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::data::{Filters, SortMode};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Courses,
    Tutors,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Courses, Tab::Tutors];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Courses => "Courses",
            Tab::Tutors => "Tutors",
        }
    }
}

/// Ephemeral UI state. Never written back into the catalogue.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub filters: Filters,
    pub sort: SortMode,

    /// Record id shown in the detail pane
    pub selected_id: Option<usize>,

    /// Active tab
    pub tab: Tab,

    /// Tutors tab -> only tutors matching the selected record's focus area
    pub tutors_for_selection: bool,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            filters: Filters::default(),
            sort: SortMode::Relevance,
            selected_id: None,
            tab: Tab::Courses,
            tutors_for_selection: true,
            window_w: WINDOW_W,
            window_h: WINDOW_H,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn with_options(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
