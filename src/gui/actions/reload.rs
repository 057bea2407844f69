// src/gui/actions/reload.rs
use crate::gui::app::App;

/// Re-read sources. An unchanged catalogue file comes straight back from the
/// cache; a changed one is parsed again and the filters are re-applied.
pub fn reload(app: &mut App) {
    let before = app.catalogue.len();
    logf!("Reload: {}", app.state.options.sources.catalogue.display());
    app.load_sources();
    logd!("Reload: records {} → {}", before, app.catalogue.len());
}
