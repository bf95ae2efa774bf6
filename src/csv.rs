// src/csv.rs
use std::io::{self, Write};

use crate::config::consts::LIST_HEADERS;
use crate::engine::layout::clock_range;
use crate::engine::WeekView;

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Weekly list → rows ---------------- */

pub fn list_headers() -> Vec<String> {
    LIST_HEADERS.iter().map(|h| s!(*h)).collect()
}

/// One row per visible session: day, periods, time, course, teacher, room, weeks.
pub fn list_rows(view: &WeekView) -> Vec<Vec<String>> {
    let periods = &view.schedule.periods;
    view.days
        .iter()
        .flat_map(|d| {
            d.sessions.iter().map(move |s| {
                let span = if s.p_from == s.p_to {
                    s.p_from.to_string()
                } else {
                    format!("{}-{}", s.p_from, s.p_to)
                };
                let clock = clock_range(periods, s);
                row![
                    d.label,
                    span,
                    clock,
                    &s.course_name,
                    &s.teacher_name,
                    &s.room_name,
                    &s.valid_weeks_text,
                ]
            })
        })
        .collect()
}

/// Create a full export string (Copy/Export) from headers + rows.
/// - `include_headers`: whether to emit a header line
/// - `sep`: character to be used as field/cell separator
pub fn to_export_string(
    headers: &Option<Vec<String>>,
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        if let Some(h) = headers {
            let _ = write_row(&mut buf, h, sep);
        }
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
