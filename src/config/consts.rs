// src/config/consts.rs

// Sources
pub const DEFAULT_CATALOGUE_FILE: &str = "Online_curation.csv";
pub const DEFAULT_TUTORS_FILE: &str = "tutors.csv";
pub const CONFIG_FILE: &str = "course_explorer.toml";

// Local store (logs)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "course_explorer=info";

// Normalization
pub const ELLIPSIS: &str = "…";
pub const SENTINELS: [&str; 3] = ["nan", "N/A", "Not Stated"];
pub const SHORT_DESCRIPTION_WIDTH: usize = 250;
pub const SKILL_TAG_MAX_CHARS: usize = 60;

// Detail pane limits
pub const DETAIL_OUTCOMES_MAX_CHARS: usize = 800;
pub const DETAIL_PREREQS_MAX_CHARS: usize = 300;
pub const DETAIL_SKILLS_MAX: usize = 10;
pub const DETAIL_SKILL_MAX_CHARS: usize = 100;

// Stats
pub const TOP_SKILLS: usize = 5;
pub const TOP_SKILL_LABEL_CHARS: usize = 35;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const EXPORT_FILE_PREFIX: &str = "courses_export_";

// Window
pub const WINDOW_W: f32 = 1280.0;
pub const WINDOW_H: f32 = 800.0;
pub const FILTER_PANEL_WIDTH: f32 = 260.0;
pub const DETAIL_PANEL_WIDTH: f32 = 360.0;
