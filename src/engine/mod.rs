// src/engine/mod.rs
//! Pure timetable pipeline: decode → merge → (week) filter → layout.
//! No I/O and no clock access in here; callers pass dates in.
pub mod decode;
pub mod layout;
pub mod merge;
pub mod week;

use crate::config::consts::LABEL_WHOLE_TERM;
use crate::model::{DayView, Schedule, TermPhase, WeekState};
use layout::Layout;

/// One week of a schedule, ready for rendering.
#[derive(Clone, Debug)]
pub struct WeekView<'a> {
    pub schedule: &'a Schedule,
    pub week: WeekState,
    pub days: Vec<DayView<'a>>,
    /// Highlighted column (Mon..Fri), only meaningful for the current week.
    pub today_column: Option<usize>,
}

impl<'a> WeekView<'a> {
    pub fn new(
        schedule: &'a Schedule,
        week: WeekState,
        final_week: u32,
        today_column: Option<usize>,
    ) -> Self {
        let days = week::filter_by_week(&schedule.days, week.week_number, final_week);
        Self { schedule, week, days, today_column }
    }

    /// Every session of the term, no week filtering.
    pub fn whole_term(schedule: &'a Schedule) -> Self {
        Self {
            schedule,
            week: WeekState {
                week_number: None,
                phase: TermPhase::InTerm,
                label: s!(LABEL_WHOLE_TERM),
            },
            days: schedule.days.iter().map(DayView::all).collect(),
            today_column: None,
        }
    }

    pub fn layout(&self) -> Layout<'a> {
        layout::layout(&self.schedule.periods, &self.days, self.today_column)
    }

    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }
}
