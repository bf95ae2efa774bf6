// src/render/page.rs
//
// Weekly page: bundled template + theme, static grid with rowspans, per-day
// list and the schedule JSON for scripts that want it.

use crate::config::consts::LABEL_NO_COURSES;
use crate::core::sanitize::escape_html;
use crate::engine::layout::{clock_range, time_range, CellKind, Layout};
use crate::engine::WeekView;
use crate::model::Schedule;

pub const TEMPLATE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/template.html"));
pub const THEME_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme.css"));

/// Values substituted into `{{…}}` and comment placeholders.
pub struct TemplateFields<'a> {
    pub title: &'a str,
    pub meta_course: String,
    pub meta_period: String,
    pub meta_exported_at: String,
    pub week_label: &'a str,
    pub css: &'a str,
    pub table: String,
    pub list: String,
    pub data_json: String,
}

/// Missing metadata prints as "-".
fn or_dash(v: impl ToString) -> String {
    let s = v.to_string();
    if s.is_empty() || s == "0" { s!("-") } else { s }
}

/// One left-to-right pass: inserted values are never rescanned, so a title or
/// course name that looks like a placeholder stays literal. Text fields are
/// escaped; `css`, `table`, `list` and `data_json` go in as-is.
pub fn fill_template(template: &str, f: &TemplateFields) -> String {
    let values: [(&str, String); 9] = [
        ("{{TITLE}}", escape_html(f.title)),
        ("{{META_COURSE}}", escape_html(&f.meta_course)),
        ("{{META_PERIOD}}", escape_html(&f.meta_period)),
        ("{{META_EXPORTED_AT}}", escape_html(&f.meta_exported_at)),
        ("{{WEEK_LABEL}}", escape_html(f.week_label)),
        ("/*__THEME_CSS__*/", s!(f.css)),
        ("<!--__TABLE__-->", f.table.clone()),
        ("<!--__LIST__-->", f.list.clone()),
        ("/*__DATA_JSON__*/", f.data_json.clone()),
    ];

    let mut out = String::with_capacity(template.len() + f.table.len() + f.css.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(*key).map(|at| (at, *key, value)))
            .min_by_key(|&(at, _, _)| at);
        let Some((at, key, value)) = next else { break };
        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + key.len()..];
    }
    out.push_str(rest);
    out
}

/// Schedule JSON safe to embed in a <script> element.
pub fn data_json(schedule: &Schedule) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(schedule)?.replace("</", "<\\/"))
}

fn class_attr(today: bool) -> &'static str {
    if today { r#" class="today""# } else { "" }
}

pub fn table_html(view: &WeekView, layout: &Layout) -> String {
    let periods = &view.schedule.periods;
    let mut out = s!("<thead><tr>");
    out.push_str(&format!(r#"<th class="week-label">{}</th>"#, escape_html(&view.week.label)));
    for h in &layout.header {
        out.push_str(&format!("<th{}>{}</th>", class_attr(h.today), escape_html(h.label)));
    }
    out.push_str("</tr></thead>\n<tbody>\n");

    for row in &layout.rows {
        out.push_str(&format!(r#"<tr><th class="period">{}</th>"#, escape_html(&row.label)));
        for cell in &row.cells {
            match cell.kind {
                CellKind::Empty => out.push_str(&format!("<td{}></td>", class_attr(cell.today))),
                CellKind::Span { session, rows } => {
                    out.push_str(&format!(
                        concat!(
                            r#"<td{} rowspan="{}"><div class="cell">"#,
                            r#"<p class="name">{}</p>"#,
                            r#"<p class="detail">{}</p>"#,
                            r#"<p class="weeks">周次：{}</p>"#,
                            r#"<p class="detail">{}</p>"#,
                            "</div></td>"
                        ),
                        class_attr(cell.today),
                        rows,
                        escape_html(&session.course_name),
                        escape_html(&session.detail()),
                        escape_html(&session.valid_weeks_text),
                        escape_html(&clock_range(periods, session)),
                    ));
                }
            }
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>");
    out
}

pub fn list_html(view: &WeekView) -> String {
    let periods = &view.schedule.periods;
    let mut out = s!();
    for (i, d) in view.days.iter().enumerate() {
        let cls = if view.today_column == Some(i) { "day today" } else { "day" };
        out.push_str(&format!(
            r#"<section class="{cls}"><h2>{} {}</h2>"#,
            escape_html(&view.week.label),
            escape_html(d.label)
        ));
        if d.sessions.is_empty() {
            out.push_str(&format!(r#"<p class="empty">{LABEL_NO_COURSES}</p>"#));
        }
        for s in &d.sessions {
            out.push_str(&format!(
                concat!(
                    r#"<div class="session">"#,
                    r#"<p class="time">{}</p>"#,
                    r#"<p class="name">{}</p>"#,
                    r#"<p class="detail">{}</p>"#,
                    r#"<p class="detail">周次：{}</p>"#,
                    "</div>"
                ),
                escape_html(&time_range(periods, s)),
                escape_html(&s.course_name),
                escape_html(&s.detail()),
                escape_html(&s.valid_weeks_text),
            ));
        }
        out.push_str("</section>\n");
    }
    out
}

pub fn render_page(view: &WeekView) -> Result<String, Box<dyn std::error::Error>> {
    let schedule = view.schedule;
    let layout = view.layout();
    let fields = TemplateFields {
        title: &schedule.title,
        meta_course: or_dash(schedule.meta.course_count),
        meta_period: or_dash(schedule.meta.period_count),
        meta_exported_at: or_dash(&schedule.meta.exported_at),
        week_label: &view.week.label,
        css: THEME_CSS,
        table: table_html(view, &layout),
        list: list_html(view),
        data_json: data_json(schedule)?,
    };
    logd!(
        "Render: page week={:?} rows={} spans={}",
        view.week.week_number,
        layout.rows.len(),
        layout.span_count()
    );
    Ok(fill_template(TEMPLATE, &fields))
}
