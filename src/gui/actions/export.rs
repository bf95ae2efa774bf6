// src/gui/actions/export.rs
use crate::{core::sanitize::sanitize_filename, config::consts::DEFAULT_FILE, file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let status_msg = match app.view() {
        None => {
            logd!("Export: Clicked, but there's nothing loaded");
            s!("Nothing to export")
        }
        Some(view) => {
            let export = &app.state.options.export;
            logf!(
                "Export: Begin format={:?}, week={}, sessions={}",
                export.format,
                view.week.label,
                view.session_count()
            );
            match file::write_export(export, &view) {
                Ok(path) => {
                    logf!("Export: OK last={}", path.display());
                    format!("Exported {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
    app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
}

/// After a load: name the output after the schedule unless the user typed a path.
pub(super) fn adopt_title(app: &mut App) {
    if app.out_path_dirty {
        return;
    }
    let Some(schedule) = &app.schedule else { return };
    let stem = sanitize_filename(&schedule.title, DEFAULT_FILE);
    app.state.options.export.set_stem(&stem);
    app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
    logd!("Export: stem ← {}", stem);
}
