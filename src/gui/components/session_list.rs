// src/gui/components/session_list.rs
//
// Flat table of the week's sessions; same rows as the CSV export.

use eframe::egui::{self, Align, Layout, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::csv::{list_headers, list_rows};
use crate::gui::app::App;

const WIDTHS: [f32; 7] = [48.0, 56.0, 110.0, 200.0, 110.0, 140.0, 140.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view() else {
        ui.centered_and_justified(|ui| ui.label("Load a timetable to start"));
        return;
    };
    let headers = list_headers();
    let rows = list_rows(&view);

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("session_list");
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let Some(data) = rows.get(row.index()) else { return };
                for cell in data {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(cell);
                        });
                    });
                }
            });
        });
}
