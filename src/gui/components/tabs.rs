// src/gui/components/tabs.rs
//
// Grid / List switch. Both tabs show the same week; only the drawing differs.

use eframe::egui;
use crate::config::state::ViewKind;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.view;
        for kind in ViewKind::ALL {
            let selected = kind == cur;
            if ui.selectable_label(selected, kind.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, kind);
                app.state.gui.view = kind;
            }
        }

        if let Some(schedule) = &app.schedule {
            ui.separator();
            ui.label(egui::RichText::new(&schedule.title).strong());
            ui.label(format!(
                "课程数：{}  节次：{}",
                schedule.meta.course_count, schedule.meta.period_count
            ));
        }
    });
}
