// src/render/mod.rs
pub mod page;
pub mod snapshot;

use crate::config::consts::LABEL_NO_COURSES;
use crate::config::options::ExportFormat;
use crate::csv::{list_headers, list_rows, to_export_string};
use crate::engine::layout::time_range;
use crate::engine::WeekView;

/// Human-readable weekly list (CLI default output).
pub fn list_text(view: &WeekView) -> String {
    let periods = &view.schedule.periods;
    let mut out = join!(&view.schedule.title, "  [", &view.week.label, "]\n");
    for d in &view.days {
        out.push_str(&format!("{} {}\n", view.week.label, d.label));
        if d.sessions.is_empty() {
            out.push_str(&format!("  {LABEL_NO_COURSES}\n"));
            continue;
        }
        for s in &d.sessions {
            out.push_str(&format!("  {}  {}", time_range(periods, s), s.course_name));
            let detail = s.detail();
            if !detail.is_empty() {
                out.push_str(&format!("  {detail}"));
            }
            if !s.valid_weeks_text.is_empty() {
                out.push_str(&format!("  [{}]", s.valid_weeks_text));
            }
            out.push('\n');
        }
    }
    out
}

/// Render `view` in the requested format.
/// Snapshot and JSON always carry the whole term; the rest follow the view's week.
pub fn render_export(
    format: ExportFormat,
    view: &WeekView,
    include_headers: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        ExportFormat::Html => page::render_page(view)?,
        ExportFormat::Snapshot => snapshot::render_snapshot(view.schedule),
        ExportFormat::Json => serde_json::to_string_pretty(view.schedule)?,
        ExportFormat::Text => list_text(view),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = format.delim().ok_or("CSV/TSV format without a delimiter")?;
            to_export_string(&Some(list_headers()), &list_rows(view), include_headers, sep)
        }
    })
}
