// src/engine/week.rs
//
// Academic week arithmetic and the week filter.
// Week text looks like "1-8周, 10周, 12-16周"; the bit-string form comes from
// the raw slot export ("0111111110100..." with index 0 unused).

use chrono::NaiveDate;

use crate::model::{Day, DayView};

/// Inclusive week range.
pub type WeekRange = (u32, u32);

/// Lenient `YYYY-MM-DD` (surrounding spaces and unpadded fields allowed).
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.trim().split('-');
    let y: i32 = parts.next()?.trim().parse().ok()?;
    let m: u32 = parts.next()?.trim().parse().ok()?;
    let d: u32 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(y, m, d)
}

/// 1-based week containing `today`, or None before the term starts.
/// Not capped at the final week; see `WeekState` for classification.
pub fn current_week(week1_start: NaiveDate, today: NaiveDate) -> Option<u32> {
    let days = (today - week1_start).num_days();
    if days < 0 {
        return None;
    }
    u32::try_from(days / 7 + 1).ok()
}

/// Every `N` or `N-M` found in the text, in order. Other characters are ignored.
pub fn parse_week_ranges(text: &str) -> Vec<WeekRange> {
    let b = text.as_bytes();
    let n = b.len();
    let mut i = 0usize;
    let mut out = Vec::new();

    while i < n {
        if !b[i].is_ascii_digit() {
            i += 1;
            continue;
        }
        let (start, after_start) = read_number(b, i);
        i = after_start;

        // optional "\s*-\s*\d+"
        let mut j = skip_spaces(b, i);
        let mut end = start;
        if j < n && b[j] == b'-' {
            j = skip_spaces(b, j + 1);
            if j < n && b[j].is_ascii_digit() {
                let (v, after_end) = read_number(b, j);
                end = v;
                i = after_end;
            }
        }
        out.push((start, end));
    }
    out
}

fn read_number(b: &[u8], mut i: usize) -> (u32, usize) {
    let mut v: u32 = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        v = v.saturating_mul(10).saturating_add(u32::from(b[i] - b'0'));
        i += 1;
    }
    (v, i)
}

fn skip_spaces(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Empty range list means "no restriction".
pub fn week_in_ranges(week: u32, ranges: &[WeekRange]) -> bool {
    ranges.is_empty() || ranges.iter().any(|&(a, b)| a <= week && week <= b)
}

/// Does a session with this week text run in `week`?
pub fn runs_in_week(weeks_text: &str, week: u32) -> bool {
    week_in_ranges(week, &parse_week_ranges(weeks_text))
}

/// Per-week view of `days`. Outside the term (no week, or past `final_week`
/// when it is non-zero) every day comes back empty.
pub fn filter_by_week<'a>(days: &'a [Day], week: Option<u32>, final_week: u32) -> Vec<DayView<'a>> {
    let week = match week {
        Some(w) if final_week == 0 || w <= final_week => w,
        _ => return days.iter().map(DayView::blank).collect(),
    };

    days.iter()
        .map(|d| DayView {
            id: &d.id,
            label: &d.label,
            sessions: d
                .sessions
                .iter()
                .filter(|s| runs_in_week(&s.valid_weeks_text, week))
                .collect(),
        })
        .collect()
}

/// `"0111100011"` → `"1-4周, 8-9周"`. Index 0 is ignored.
pub fn weeks_text_from_bits(bits: &str) -> String {
    let b = bits.trim().as_bytes();
    let mut ranges: Vec<WeekRange> = Vec::new();
    let mut start: Option<usize> = None;

    for i in 1..b.len() {
        match (b[i] == b'1', start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                ranges.push((s as u32, i as u32 - 1));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        ranges.push((s as u32, b.len() as u32 - 1));
    }

    ranges
        .iter()
        .map(|&(a, z)| if a == z { format!("{a}周") } else { format!("{a}-{z}周") })
        .collect::<Vec<_>>()
        .join(", ")
}
