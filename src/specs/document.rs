// src/specs/document.rs
//
// Structured HTML export. Shape (attributes other than class are ignored):
//
//   <title>…</title>
//   <span class="count-courses">课程数：12</span>
//   <span class="count-periods">节次：12</span>
//   <span class="exported-at">导出时间：2026-03-01 10:00</span>
//   <table>
//     <thead><tr><th></th><th>周一</th>…</tr></thead>
//     <tbody>
//       <tr><th class="period">第1节 08:00–08:45</th>
//           <td><div class="course">
//                 <div class="course-name">…</div>
//                 <div class="course-meta">teacher · room</div>
//                 <div class="week-range">1-16周</div>
//           </div></td>…</tr>
//
// Weekend columns are dropped; td positions still follow the header.

use super::{day_id, ScheduleSource, SourceContext};
use crate::config::consts::{DEFAULT_TITLE, META_SEP, UNNAMED_COURSE, WEEKEND_LABELS};
use crate::core::html::{parse_tree, Element};
use crate::engine::merge::{build_sessions, PeriodCells};
use crate::model::{Day, Meta, Occurrence, Period, Schedule};

pub struct StructuredDocument {
    tree: Element,
}

impl StructuredDocument {
    pub fn parse(html: &str) -> Self {
        Self { tree: parse_tree(html) }
    }
}

impl ScheduleSource for StructuredDocument {
    fn label(&self) -> &'static str { "structured document" }

    fn to_schedule(&self, ctx: &SourceContext) -> Option<Schedule> {
        schedule_from_tree(&self.tree, ctx)
    }
}

/// Parse + adapt with a default context.
pub fn parse_document(html: &str) -> Option<Schedule> {
    schedule_from_tree(&parse_tree(html), &SourceContext::default())
}

/// First run of ASCII digits.
pub fn parse_meta_number(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..].chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Text after the first full-width or ASCII colon; whole text when there is none.
pub fn parse_meta_value(text: &str) -> String {
    let t = text.trim();
    let after = t
        .split_once('：')
        .or_else(|| t.split_once(':'))
        .map_or(t, |(_, v)| v);
    s!(after.trim())
}

/// `teacher · room`; extra separators stay in the room part, `· room` has no teacher.
pub fn parse_course_meta(text: &str) -> (String, String) {
    let t = text.trim();
    if let Some(room) = t.strip_prefix('·') {
        return (s!(), s!(room.trim()));
    }
    match t.split_once(META_SEP) {
        Some((teacher, room)) => (s!(teacher), s!(room)),
        None => (s!(t), s!()),
    }
}

/// `第3节 10:00–10:45` anywhere in the text; otherwise the fallback number with
/// empty times.
pub fn parse_period_text(text: &str, fallback: u32) -> Period {
    let mut rest = text;
    while let Some(at) = rest.find('第') {
        let tail = &rest[at + '第'.len_utf8()..];
        if let Some(period) = period_after_marker(tail) {
            return period;
        }
        rest = tail;
    }
    Period::numbered(fallback)
}

fn period_after_marker(tail: &str) -> Option<Period> {
    let t = tail.trim_start();
    let digits_len = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    if digits_len == 0 {
        return None;
    }
    let p: u32 = t[..digits_len].parse().ok()?;
    let t = t[digits_len..].trim_start().strip_prefix('节')?.trim_start();
    let (start, t) = take_clock(t)?;
    let t = t.trim_start().strip_prefix(['–', '-'])?.trim_start();
    let (end, _) = take_clock(t)?;
    Some(Period { p, start: s!(start), end: s!(end) })
}

/// `HH:MM` prefix.
fn take_clock(t: &str) -> Option<(&str, &str)> {
    let b = t.as_bytes();
    let ok = b.len() >= 5
        && b[0].is_ascii_digit()
        && b[1].is_ascii_digit()
        && b[2] == b':'
        && b[3].is_ascii_digit()
        && b[4].is_ascii_digit();
    ok.then(|| t.split_at(5))
}

fn course_occurrence(course: &Element) -> Occurrence {
    let text_of = |class: &str| {
        course
            .find_first(|e| e.is("div", Some(class)))
            .map(Element::text)
            .unwrap_or_default()
    };
    let name = text_of("course-name");
    let (teacher, room) = parse_course_meta(&text_of("course-meta"));
    Occurrence {
        course_name: if name.is_empty() { s!(UNNAMED_COURSE) } else { name },
        teacher_name: teacher,
        room_name: room,
        valid_weeks_text: text_of("week-range"),
    }
}

pub fn schedule_from_tree(root: &Element, _ctx: &SourceContext) -> Option<Schedule> {
    let title = root
        .find_first(|e| e.tag == "title")
        .map(Element::text)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| s!(DEFAULT_TITLE));

    let span_text = |class: &str| {
        root.find_first(|e| e.is("span", Some(class))).map(Element::text)
    };
    let declared_courses = span_text("count-courses").and_then(|t| parse_meta_number(&t));
    let declared_periods = span_text("count-periods").and_then(|t| parse_meta_number(&t));
    let exported_at = span_text("exported-at").map(|t| parse_meta_value(&t)).unwrap_or_default();

    let Some(table) = root.find_first(|e| e.tag == "table") else {
        logd!("Document: no <table>");
        return None;
    };

    // (label, td index) for every kept weekday column
    let mut columns: Vec<(String, usize)> = Vec::new();
    if let Some(thead) = table.find_first(|e| e.tag == "thead") {
        for (i, th) in thead.find_all(|e| e.tag == "th").into_iter().enumerate().skip(1) {
            let label = th.text();
            if WEEKEND_LABELS.contains(&label.as_str()) {
                continue;
            }
            columns.push((label, i - 1));
        }
    }

    let Some(tbody) = table.find_first(|e| e.tag == "tbody") else {
        logd!("Document: table without <tbody>");
        return None;
    };

    let mut periods: Vec<Period> = Vec::new();
    let mut per_day: Vec<PeriodCells> = vec![PeriodCells::new(); columns.len()];

    for (row_ix, tr) in tbody.children_by_tag("tr").enumerate() {
        let label = tr
            .children_by_tag("th")
            .find(|th| th.has_class("period"))
            .map(Element::text)
            .unwrap_or_default();
        let period = parse_period_text(&label, row_ix as u32 + 1);

        let tds: Vec<&Element> = tr.children_by_tag("td").collect();
        for (day_ix, (_, td_ix)) in columns.iter().enumerate() {
            let Some(td) = tds.get(*td_ix) else { continue };
            let list: Vec<Occurrence> = td
                .find_all(|e| e.is("div", Some("course")))
                .into_iter()
                .map(course_occurrence)
                .collect();
            if !list.is_empty() {
                per_day[day_ix].insert(period.p, list);
            }
        }
        periods.push(period);
    }

    let period_count = periods.len() as u32;
    let days: Vec<Day> = columns
        .into_iter()
        .zip(per_day.iter())
        .enumerate()
        .map(|(i, ((label, _), cells))| Day {
            id: day_id(i),
            label,
            sessions: build_sessions(cells, period_count),
        })
        .collect();

    let mut schedule = Schedule {
        title,
        meta: Meta {
            course_count: 0,
            period_count: declared_periods.unwrap_or(period_count),
            exported_at,
        },
        periods,
        days,
    };
    schedule.meta.course_count = declared_courses.unwrap_or(schedule.distinct_courses() as u32);

    logf!(
        "Document: days={} periods={} sessions={} courses={}",
        schedule.days.len(),
        schedule.periods.len(),
        schedule.session_count(),
        schedule.meta.course_count
    );
    Some(schedule)
}
