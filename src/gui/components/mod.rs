// src/gui/components/mod.rs
//
// One file per panel. Each `draw` reads/writes `App` directly and leaves
// the heavier work (I/O, view rebuilds) to `App` methods and `actions`.

pub mod data_table;
pub mod detail_panel;
pub mod export_bar;
pub mod filter_panel;
pub mod stats_bar;
pub mod tabs;
pub mod tutor_table;
