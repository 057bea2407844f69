// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    super::apply_out_path(app);

    if app.row_ix.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let status_msg = {
        let view = app.view();
        logf!("Export: Begin rows={}, format={:?}", view.len(), app.state.options.export.format);

        match file::write_export(&app.state.options.export, &view) {
            Ok(path) => format!("Exported {} course(s) to {}", view.len(), path.display()),
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        }
    };

    // mutate app only after the catalogue borrows are gone
    app.status(status_msg);
}
