// src/gui/components/side_panel.rs
//
// Input file and term settings. Nothing here touches the loaded schedule until
// Load is pressed; the text fields are parsed by actions::load.

use eframe::egui;
use crate::gui::{actions, app::App};

fn field(ui: &mut egui::Ui, label: &str, text: &mut String, hint: &str) -> bool {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(text)
            .hint_text(hint)
            .font(egui::TextStyle::Monospace),
    )
    .changed()
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Source");

    if field(ui, "Input file:", &mut app.state.gui.input_path, "schedule.json / page.html") {
        logd!("UI: input_path → {}", app.state.gui.input_path);
    }

    ui.separator();
    ui.heading("Term");

    field(ui, "Week 1 starts (Monday):", &mut app.term_start_text, "YYYY-MM-DD");
    field(ui, "Final week (0 = none):", &mut app.final_week_text, "17");
    field(ui, "Pretend today is:", &mut app.today_text, "YYYY-MM-DD");
    field(ui, "Period times:", &mut app.periods_text, "08:00-08:45, 08:55-09:40");

    ui.separator();

    if ui.button("Load").clicked() {
        actions::load(app);
    }

    if let Some(schedule) = &app.schedule {
        ui.separator();
        ui.label(format!("Days: {}", schedule.days.len()));
        ui.label(format!("Periods: {}", schedule.periods.len()));
        ui.label(format!("Sessions: {}", schedule.session_count()));
        if !schedule.meta.exported_at.is_empty() {
            ui.label(format!("Exported: {}", schedule.meta.exported_at));
        }
    }
}
