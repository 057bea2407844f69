// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,reload}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod reload;  // src/gui/actions/reload.rs

pub use copy::copy;
pub use export::export;
pub use reload::reload;

use crate::gui::app::App;

/// Commit the typed output path into ExportOptions (if the user edited it).
pub(super) fn apply_out_path(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
    }
}
