// src/engine/decode.rs
//
// Flat slot array → (period × day) grid. The upstream export does not say how
// many periods a day has, nor in which order slots were flattened, so both are
// resolved here from hints and the array length.

use crate::config::consts::{
    DAYS_FULL_WEEK, DAYS_WITH_SAT, MAX_INFERRED_DAYS, MAX_PERIODS, MIN_INFERRED_DAYS,
};
use crate::model::Activity;

/// How slot index `i` maps onto (period, day).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Linearization {
    /// `day = i / periods`, `period = i % periods` (all periods of Monday first).
    DayMajor,
    /// `period = i / days`, `day = i % days` (all days of period 1 first).
    PeriodMajor,
}

/// The convention the upstream system is known to use.
pub const LINEARIZATION: Linearization = Linearization::DayMajor;

/// Hints shipped next to the slot array. Zero counts read as absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeHints {
    /// Periods per day, when the source states it.
    pub unit_count: Option<usize>,
    /// Total slot count claimed by the source.
    pub unit_counts: Option<usize>,
    /// Week ends on Saturday (6 days) instead of Sunday.
    pub end_at_sat: bool,
}

/// Caller-chosen decoding behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeMode {
    pub linearization: Linearization,
    /// Length of a reference period table; overrides the guessed period count.
    pub fixed_periods: Option<usize>,
}

impl Default for DecodeMode {
    fn default() -> Self {
        Self { linearization: LINEARIZATION, fixed_periods: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotGrid {
    /// `cells[period][day]`, both 0-based
    pub cells: Vec<Vec<Vec<Activity>>>,
    pub period_count: usize,
    pub day_count: usize,
}

impl SlotGrid {
    fn empty(period_count: usize, day_count: usize) -> Self {
        Self {
            cells: vec![vec![Vec::new(); day_count]; period_count],
            period_count,
            day_count,
        }
    }

    pub fn cell(&self, period: usize, day: usize) -> &[Activity] {
        self.cells
            .get(period)
            .and_then(|row| row.get(day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Non-empty cells of one day, keyed by 1-based period number.
    pub fn day_column(&self, day: usize) -> impl Iterator<Item = (u32, &[Activity])> + '_ {
        (0..self.period_count)
            .map(move |p| (p as u32 + 1, self.cell(p, day)))
            .filter(|(_, acts)| !acts.is_empty())
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }
}

/// Half-up rounding of `n / d` (`d > 0`), without overflow.
fn round_div(n: usize, d: usize) -> usize {
    let r = n % d;
    n / d + usize::from(r >= d - r)
}

/// A period count worth trusting: zero is absent, past `MAX_PERIODS` is noise.
fn hint(v: Option<usize>) -> Option<usize> {
    v.filter(|n| (1..=MAX_PERIODS).contains(n))
}

/// Resolve (period_count, day_count) for a slot array of length `len`.
/// Both are bounded, so the grid never exceeds `MAX_PERIODS × 7` cells.
pub fn resolve_dims(len: usize, hints: &DecodeHints, fixed_periods: Option<usize>) -> (usize, usize) {
    let default_days = if hints.end_at_sat { DAYS_WITH_SAT } else { DAYS_FULL_WEEK };

    let period_count = hint(fixed_periods)
        .or(hint(hints.unit_count))
        .or_else(|| hint(hints.unit_counts.map(|n| round_div(n, default_days))))
        .unwrap_or_else(|| round_div(len, default_days).clamp(1, MAX_PERIODS));

    let inferred = round_div(len, period_count);
    let day_count = if (MIN_INFERRED_DAYS..=MAX_INFERRED_DAYS).contains(&inferred) {
        inferred
    } else {
        default_days
    };

    (period_count, day_count)
}

/// Map slot index → (period, day), or None when it falls outside the grid.
pub fn slot_position(
    i: usize,
    period_count: usize,
    day_count: usize,
    linearization: Linearization,
) -> Option<(usize, usize)> {
    let (period, day) = match linearization {
        Linearization::DayMajor => (i % period_count, i / period_count),
        Linearization::PeriodMajor => (i / day_count, i % day_count),
    };
    (period < period_count && day < day_count).then_some((period, day))
}

/// Decode with the default convention.
pub fn decode(activities: &[Vec<Activity>], hints: &DecodeHints) -> Option<SlotGrid> {
    decode_with(activities, hints, &DecodeMode::default())
}

pub fn decode_with(
    activities: &[Vec<Activity>],
    hints: &DecodeHints,
    mode: &DecodeMode,
) -> Option<SlotGrid> {
    if activities.is_empty() {
        return None;
    }

    let (period_count, day_count) = resolve_dims(activities.len(), hints, mode.fixed_periods);
    logd!(
        "Decode: slots={} unit_count={:?} unit_counts={:?} end_at_sat={} → periods={} days={} ({:?})",
        activities.len(),
        hints.unit_count,
        hints.unit_counts,
        hints.end_at_sat,
        period_count,
        day_count,
        mode.linearization
    );

    let mut grid = SlotGrid::empty(period_count, day_count);
    let mut dropped = 0usize;
    for (i, slot) in activities.iter().enumerate() {
        match slot_position(i, period_count, day_count, mode.linearization) {
            Some((period, day)) => grid.cells[period][day] = slot.clone(),
            None => dropped += usize::from(!slot.is_empty()),
        }
    }
    if dropped > 0 {
        logw!("Decode: {} non-empty slot(s) fell outside the grid", dropped);
    }

    Some(grid)
}
