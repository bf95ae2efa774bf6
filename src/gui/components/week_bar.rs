// src/gui/components/week_bar.rs
//
// Week navigation: step through weeks, jump back to the current one, or show
// the whole term. Stepping starts from the current week when nothing is picked.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let term = &app.state.options.term;
    let current = term.week_state();
    let gui = &mut app.state.gui;

    ui.horizontal(|ui| {
        let shown = gui.browse_week.or(current.week_number).unwrap_or(0);

        ui.add_enabled_ui(!gui.whole_term, |ui| {
            if ui.add_enabled(shown > 1, egui::Button::new("◀")).clicked() {
                gui.browse_week = Some(shown - 1);
                logd!("UI: browse week → {}", shown - 1);
            }
            if ui.button("▶").clicked() {
                gui.browse_week = Some(shown + 1);
                logd!("UI: browse week → {}", shown + 1);
            }
            if ui
                .add_enabled(gui.browse_week.is_some(), egui::Button::new("This week"))
                .clicked()
            {
                gui.browse_week = None;
                logd!("UI: browse week → current ({})", current.label);
            }
        });

        if ui.checkbox(&mut gui.whole_term, "Whole term").changed() {
            logf!("UI: whole_term → {}", gui.whole_term);
        }
    });

    if let Some(view) = app.view() {
        let mut text = egui::RichText::new(&view.week.label).heading();
        if !view.week.in_term() {
            text = text.weak();
        }
        ui.horizontal(|ui| {
            ui.label(text);
            if view.week.week_number == current.week_number && !app.state.gui.whole_term {
                ui.label(egui::RichText::new("(current)").small());
            }
            ui.label(format!("{} sessions", view.session_count()));
        });
    }
}
