// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, render};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let export = &app.state.options.export;

    let txt = {
        let Some(view) = app.view() else {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but there's nothing loaded");
            return;
        };

        logf!(
            "Copy: format={:?}, week={}, sessions={}",
            export.format,
            view.week.label,
            view.session_count()
        );

        match render::render_export(export.format, &view, export.include_headers) {
            Ok(t) => t,
            Err(e) => {
                loge!("Copy: Error: {}", e);
                app.status(format!("Copy error: {e}"));
                return;
            }
        }
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
