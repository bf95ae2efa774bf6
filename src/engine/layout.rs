// src/engine/layout.rs
//
// Period-major grid for rendering. A multi-period session becomes one cell with
// a row span at its first period; the periods it covers emit nothing at all, so
// renderers can copy rows straight into <tr>/<td rowspan>.

use std::collections::{HashMap, HashSet};

use crate::model::{DayView, Period, Session};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellKind<'a> {
    Empty,
    Span { session: &'a Session, rows: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<'a> {
    /// Column index into the day list.
    pub day: usize,
    pub kind: CellKind<'a>,
    pub today: bool,
}

impl<'a> Cell<'a> {
    pub fn session(&self) -> Option<&'a Session> {
        match self.kind {
            CellKind::Span { session, .. } => Some(session),
            CellKind::Empty => None,
        }
    }

    pub fn rows(&self) -> u32 {
        match self.kind {
            CellKind::Span { rows, .. } => rows,
            CellKind::Empty => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell<'a> {
    pub label: &'a str,
    pub today: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row<'a> {
    pub period: &'a Period,
    /// Leading period column text, e.g. `第1节 08:00–08:45`.
    pub label: String,
    /// Covered (day, period) pairs are absent, so this may be shorter than the day count.
    pub cells: Vec<Cell<'a>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout<'a> {
    pub header: Vec<HeaderCell<'a>>,
    pub rows: Vec<Row<'a>>,
    pub today_column: Option<usize>,
}

impl<'a> Layout<'a> {
    pub fn day_count(&self) -> usize {
        self.header.len()
    }

    /// Number of cells that start a session.
    pub fn span_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.session().is_some())
            .count()
    }
}

/// Lay week-filtered days onto `periods`.
///
/// When two sessions of one day claim the same period the later one wins that
/// period; the earlier one may then lose its starting cell.
pub fn layout<'a>(
    periods: &'a [Period],
    days: &[DayView<'a>],
    today_column: Option<usize>,
) -> Layout<'a> {
    let by_period: Vec<HashMap<u32, &'a Session>> = days
        .iter()
        .map(|d| {
            let mut m = HashMap::new();
            for &s in &d.sessions {
                for p in s.p_from..=s.p_to {
                    m.insert(p, s);
                }
            }
            m
        })
        .collect();
    let mut covered: Vec<HashSet<u32>> = vec![HashSet::new(); days.len()];

    let header = days
        .iter()
        .enumerate()
        .map(|(i, d)| HeaderCell { label: d.label, today: today_column == Some(i) })
        .collect();

    let mut rows = Vec::with_capacity(periods.len());
    for per in periods {
        let mut cells = Vec::with_capacity(days.len());

        for day in 0..days.len() {
            if covered[day].contains(&per.p) {
                continue;
            }
            let today = today_column == Some(day);

            let kind = match by_period[day].get(&per.p) {
                Some(&s) if s.p_from == per.p => {
                    for mark in s.p_from + 1..=s.p_to {
                        covered[day].insert(mark);
                    }
                    CellKind::Span { session: s, rows: s.span() }
                }
                _ => CellKind::Empty,
            };
            cells.push(Cell { day, kind, today });
        }

        rows.push(Row { period: per, label: per.label(), cells });
    }

    Layout { header, rows, today_column }
}

fn find_period(periods: &[Period], p: u32) -> Option<&Period> {
    periods.iter().find(|per| per.p == p)
}

/// `08:00–09:35`, or empty when either end is unknown.
pub fn clock_range(periods: &[Period], session: &Session) -> String {
    match (find_period(periods, session.p_from), find_period(periods, session.p_to)) {
        (Some(a), Some(b)) if !a.start.is_empty() || !b.end.is_empty() => {
            format!("{}–{}", a.start, b.end)
        }
        _ => s!(),
    }
}

/// `08:00–09:35（第1–2节）`; falls back to the period numbers alone.
pub fn time_range(periods: &[Period], session: &Session) -> String {
    let clock = clock_range(periods, session);
    let nums = format!("第{}–{}节", session.p_from, session.p_to);
    if clock.is_empty() {
        nums
    } else {
        format!("{clock}（{nums}）")
    }
}
