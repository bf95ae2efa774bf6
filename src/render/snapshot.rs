// src/render/snapshot.rs
//
// Full-term page in the structured-document layout: every period × day cell is
// written out, multi-period sessions repeat in each covered row. Reading it back
// with `specs::document` gives the weekday part of the schedule again.

use crate::config::consts::META_SEP;
use crate::core::sanitize::escape_html;
use crate::model::{Day, Period, Schedule, Session};

fn course_block(s: &Session) -> String {
    let mut out = s!(r#"<div class="course">"#);
    out.push_str(&format!(r#"<div class="course-name">{}</div>"#, escape_html(&s.course_name)));
    let meta = match (s.teacher_name.is_empty(), s.room_name.is_empty()) {
        (true, true) => s!(),
        (false, true) => s!(&s.teacher_name),
        _ => join!(&s.teacher_name, META_SEP, &s.room_name),
    };
    if !meta.is_empty() {
        out.push_str(&format!(r#"<div class="course-meta">{}</div>"#, escape_html(&meta)));
    }
    if !s.valid_weeks_text.is_empty() {
        out.push_str(&format!(r#"<div class="week-range">{}</div>"#, escape_html(&s.valid_weeks_text)));
    }
    out.push_str("</div>");
    out
}

fn cell_html(day: &Day, period: &Period) -> String {
    let blocks: String = day
        .sessions
        .iter()
        .filter(|s| s.covers(period.p))
        .map(course_block)
        .collect();
    if blocks.is_empty() {
        s!(r#"<td class="empty"><span>—</span></td>"#)
    } else {
        join!("<td>", &blocks, "</td>")
    }
}

pub fn render_snapshot(schedule: &Schedule) -> String {
    let title = escape_html(&schedule.title);
    let mut out = s!("<!DOCTYPE html>\n<html lang=\"zh-CN\">\n<head>\n<meta charset=\"utf-8\" />\n");
    out.push_str(&format!("<title>{title}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n", super::page::THEME_CSS));
    out.push_str(&format!(r#"<main class="page"><header class="hero"><h1>{title}</h1><div class="meta">"#));
    out.push_str(&format!(r#"<span class="badge count-courses">课程数：{}</span>"#, schedule.meta.course_count));
    out.push_str(&format!(r#"<span class="badge count-periods">节次：{}</span>"#, schedule.meta.period_count));
    out.push_str(&format!(
        r#"<span class="badge exported-at">导出时间：{}</span>"#,
        escape_html(&schedule.meta.exported_at)
    ));
    out.push_str("</div></header>\n<section class=\"table-wrap\"><table class=\"grid\">\n<thead><tr><th></th>");
    for d in &schedule.days {
        out.push_str(&format!("<th>{}</th>", escape_html(&d.label)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for per in &schedule.periods {
        out.push_str(&format!(r#"<tr><th class="period">{}</th>"#, escape_html(&per.label())));
        for d in &schedule.days {
            out.push_str(&cell_html(d, per));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table></section></main>\n</body>\n</html>\n");

    logd!(
        "Render: snapshot days={} periods={} sessions={}",
        schedule.days.len(),
        schedule.periods.len(),
        schedule.session_count()
    );
    out
}
