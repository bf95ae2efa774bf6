// src/specs/mod.rs
//! # Input “specs” module
//!
//! This module hosts the **input adapters**: each one knows a single captured
//! export format and turns it into the normalized [`Schedule`] model. Both
//! adapters end in the same place, so everything downstream (week filter,
//! layout, renderers, GUI) never needs to know where a schedule came from.
//!
//! ## What lives here
//! - **`flat`**: the raw slot export, a JSON object holding a flat
//!   `activities` array plus optional `unitCount` / `unitCounts` / `endAtSat`
//!   hints. Runs the slot decoder, then the session merger per day.
//! - **`document`**: the structured HTML page, a table with weekday columns,
//!   `th.period` rows and `div.course` blocks. Uses the `core::html` tree and
//!   drops weekend columns.
//! - **Input sniffing** ([`read_input`] / [`Input::detect`]): JSON with
//!   `activities` means a flat export, JSON with `days` means an already
//!   normalized schedule, and anything else is treated as HTML.
//!
//! ## What does **not** live here
//! - **Week logic**: adapters produce the full term. Filtering to one week is
//!   `engine::week`.
//! - **Rendering/export**: see `render`, `csv` and `file`.
//! - **Fetching**: inputs are files captured elsewhere.
//!
//! ## Conventions & invariants
//! - An adapter returns `None` only when there is nothing to render (empty slot
//!   array, no table, no tbody). Odd-but-usable input falls back to defaults.
//! - `meta.period_count` defaults to the number of periods, and
//!   `meta.course_count` to the distinct (name, teacher, room) triples.
//! - Day ids are `mon..sun` by column position; labels come from the source.
//!
//! ## Testing notes
//! Adapters are pure given a [`SourceContext`], so tests feed inline JSON/HTML
//! strings and compare the resulting `Schedule`.

use std::path::Path;

use crate::clock::{self, Clock};
use crate::config::consts::{DAY_IDS, DAY_LABELS};
use crate::config::options::TermOptions;
use crate::engine::decode::{LINEARIZATION, Linearization};
use crate::model::{Period, Schedule};

pub mod document;
pub mod flat;

pub use document::StructuredDocument;
pub use flat::FlatExport;

/// What adapters may know besides their own input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceContext {
    /// Reference clock times; also fixes the flat decoder's period count.
    pub period_table: Option<Vec<Period>>,
    pub linearization: Linearization,
    /// Stamp used when the source carries none.
    pub exported_at: String,
}

impl Default for SourceContext {
    fn default() -> Self {
        Self { period_table: None, linearization: LINEARIZATION, exported_at: s!() }
    }
}

impl SourceContext {
    pub fn from_term(term: &TermOptions, clock: &dyn Clock) -> Self {
        Self {
            period_table: term.period_table.clone(),
            linearization: term.linearization,
            exported_at: clock::exported_at(clock),
        }
    }
}

/// One captured export format.
pub trait ScheduleSource {
    /// Short name for logs and status lines.
    fn label(&self) -> &'static str;

    /// `None` means there is nothing to render.
    fn to_schedule(&self, ctx: &SourceContext) -> Option<Schedule>;
}

/// A schedule JSON file is already normalized.
impl ScheduleSource for Schedule {
    fn label(&self) -> &'static str { "schedule json" }

    fn to_schedule(&self, _ctx: &SourceContext) -> Option<Schedule> {
        let mut out = self.clone();
        if out.meta.period_count == 0 {
            out.meta.period_count = out.periods.len() as u32;
        }
        if out.meta.course_count == 0 {
            out.meta.course_count = out.distinct_courses() as u32;
        }
        Some(out)
    }
}

/// Sniffed input file.
pub enum Input {
    Flat(FlatExport),
    Normalized(Schedule),
    Document(StructuredDocument),
}

impl Input {
    /// JSON by content (`{` / `[`), HTML otherwise.
    pub fn detect(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let trimmed = text.trim_start_matches('\u{feff}').trim_start();
        if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
            return Ok(Input::Document(StructuredDocument::parse(text)));
        }

        let value: serde_json::Value = serde_json::from_str(trimmed)?;
        if value.is_array() || value.get("activities").is_some() {
            return Ok(Input::Flat(FlatExport::from_value(value)?));
        }
        if value.get("days").is_some() {
            return Ok(Input::Normalized(serde_json::from_value(value)?));
        }
        Err("JSON input has neither `activities` nor `days`".into())
    }

    pub fn source(&self) -> &dyn ScheduleSource {
        match self {
            Input::Flat(f) => f,
            Input::Normalized(s) => s,
            Input::Document(d) => d,
        }
    }
}

/// Read + sniff + adapt. Errors cover I/O and malformed JSON; an input with
/// nothing to render is also reported as an error here.
pub fn read_input(path: &Path, ctx: &SourceContext) -> Result<Schedule, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    let input = Input::detect(&text)?;
    let source = input.source();

    logf!("Input: {} as {}", path.display(), source.label());
    match source.to_schedule(ctx) {
        Some(schedule) => {
            logf!(
                "Input: OK title={:?} days={} periods={} sessions={}",
                schedule.title,
                schedule.days.len(),
                schedule.periods.len(),
                schedule.session_count()
            );
            Ok(schedule)
        }
        None => {
            loge!("Input: nothing to render in {}", path.display());
            Err(format!("Nothing to render in {} ({})", path.display(), source.label()).into())
        }
    }
}

pub(crate) fn day_id(i: usize) -> String {
    DAY_IDS.get(i).map_or_else(|| format!("day{}", i + 1), |id| s!(*id))
}

pub(crate) fn day_label(i: usize) -> String {
    DAY_LABELS.get(i).map_or_else(|| format!("第{}天", i + 1), |l| s!(*l))
}
