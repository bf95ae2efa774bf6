// src/gui/components/timetable.rs
//
// Painted week grid. Geometry comes straight from engine::layout: a span cell is
// one rect covering `rows` period rows, covered positions have no cell at all.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};
use crate::engine::layout::clock_range;
use crate::gui::app::App;

const LABEL_W: f32 = 128.0;
const HEADER_H: f32 = 28.0;
const ROW_H: f32 = 46.0;
const MIN_COL_W: f32 = 110.0;

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x3B, 0x6E, 0xA8),
    Color32::from_rgb(0x4E, 0x8F, 0x5A),
    Color32::from_rgb(0xA8, 0x6B, 0x3B),
    Color32::from_rgb(0x7A, 0x4F, 0xA0),
    Color32::from_rgb(0x3B, 0x8F, 0x8F),
    Color32::from_rgb(0xA0, 0x4F, 0x63),
];

/// Stable colour per course name.
fn course_fill(name: &str) -> Color32 {
    let h = name.bytes().fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32));
    PALETTE[h as usize % PALETTE.len()]
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = app.view() else {
        ui.centered_and_justified(|ui| ui.label("Load a timetable to start"));
        return;
    };
    let layout = view.layout();
    let periods = &view.schedule.periods;

    let days = layout.day_count().max(1);
    let col_w = ((ui.available_width() - LABEL_W) / days as f32).max(MIN_COL_W);
    let size = Vec2::new(
        LABEL_W + col_w * days as f32,
        HEADER_H + ROW_H * layout.rows.len() as f32,
    );

    egui::ScrollArea::both()
        .id_salt("timetable_scroll")
        .show(ui, |ui| {
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let painter = ui.painter_at(rect);
            let visuals = ui.visuals().clone();
            let grid = Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color);
            let text_color = visuals.text_color();
            let origin = rect.min;

            let col_x = |d: usize| origin.x + LABEL_W + col_w * d as f32;
            let row_y = |r: usize| origin.y + HEADER_H + ROW_H * r as f32;

            // header
            for (d, h) in layout.header.iter().enumerate() {
                let cell = Rect::from_min_size(Pos2::new(col_x(d), origin.y), Vec2::new(col_w, HEADER_H));
                if h.today {
                    painter.rect_filled(cell, 3.0, visuals.selection.bg_fill);
                }
                painter.text(cell.center(), Align2::CENTER_CENTER, h.label, FontId::proportional(14.0), text_color);
            }

            // period labels + grid lines
            for (r, row) in layout.rows.iter().enumerate() {
                let y = row_y(r);
                let label = Rect::from_min_size(Pos2::new(origin.x, y), Vec2::new(LABEL_W, ROW_H));
                painter.text(
                    label.left_center() + Vec2::new(6.0, 0.0),
                    Align2::LEFT_CENTER,
                    &row.label,
                    FontId::proportional(12.0),
                    visuals.weak_text_color(),
                );
                painter.line_segment([Pos2::new(origin.x, y), Pos2::new(rect.max.x, y)], grid);
            }
            for d in 0..=layout.day_count() {
                let x = col_x(d);
                painter.line_segment([Pos2::new(x, origin.y), Pos2::new(x, rect.max.y)], grid);
            }

            // today column tint under the sessions
            if let Some(t) = layout.today_column.filter(|&t| t < layout.day_count()) {
                let col = Rect::from_min_max(Pos2::new(col_x(t), row_y(0)), Pos2::new(col_x(t + 1), rect.max.y));
                painter.rect_filled(col, 0.0, visuals.selection.bg_fill.gamma_multiply(0.25));
            }

            // sessions
            for (r, row) in layout.rows.iter().enumerate() {
                for cell in &row.cells {
                    let Some(s) = cell.session() else { continue };
                    let bottom = row_y((r + cell.rows() as usize).min(layout.rows.len()));
                    let block = Rect::from_min_max(
                        Pos2::new(col_x(cell.day), row_y(r)),
                        Pos2::new(col_x(cell.day + 1), bottom),
                    )
                    .shrink(2.0);

                    let fill = course_fill(&s.course_name);
                    painter.rect_filled(block, 3.0, fill);
                    painter.rect_stroke(block, 3.0, Stroke::new(1.0, Color32::from_white_alpha(60)), StrokeKind::Inside);

                    let mut y = block.min.y + 4.0;
                    let mut line = |text: &str, size: f32, color: Color32| {
                        if text.is_empty() || y + size > block.max.y {
                            return;
                        }
                        painter.text(Pos2::new(block.min.x + 5.0, y), Align2::LEFT_TOP, text, FontId::proportional(size), color);
                        y += size + 3.0;
                    };
                    line(&s.course_name, 13.0, Color32::WHITE);
                    line(&s.detail(), 11.0, Color32::from_gray(230));
                    line(&s.valid_weeks_text, 11.0, Color32::from_gray(210));
                    line(&clock_range(periods, s), 11.0, Color32::from_gray(210));
                }
            }

            if view.session_count() == 0 {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    crate::config::consts::LABEL_NO_COURSES,
                    FontId::proportional(18.0),
                    visuals.weak_text_color(),
                );
            }
        });
}
