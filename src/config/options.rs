// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::consts::*;
use crate::clock::{self, Clock};
use crate::engine::decode::{LINEARIZATION, Linearization};
use crate::engine::{week, WeekView};
use crate::model::{Period, Schedule, WeekState};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub term: TermOptions,
    pub export: ExportOptions,
}

/// Everything the week calculator and the flat-array decoder are allowed to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermOptions {
    /// Monday of week 1, `YYYY-MM-DD`.
    pub week1_start: String,
    /// Last teaching week; 0 means the term never ends.
    pub final_week: u32,
    /// Pretend today is this date (`YYYY-MM-DD`). Empty or invalid → wall clock.
    pub debug_today: Option<String>,
    /// Clock times per period. When set, its length is also the decoded period count.
    pub period_table: Option<Vec<Period>>,
    pub linearization: Linearization,
}

impl Default for TermOptions {
    fn default() -> Self {
        Self {
            week1_start: s!(WEEK1_START),
            final_week: TERM_FINAL_WEEK,
            debug_today: None,
            period_table: None,
            linearization: LINEARIZATION,
        }
    }
}

impl TermOptions {
    pub fn week1_date(&self) -> Option<NaiveDate> {
        week::parse_date(&self.week1_start)
    }

    pub fn clock(&self) -> Box<dyn Clock> {
        clock::from_debug_today(self.debug_today.as_deref())
    }

    /// Week state for "now" according to the configured clock.
    pub fn week_state(&self) -> WeekState {
        let today = self.clock().today();
        WeekState::resolve(self.week1_date(), self.final_week, today)
    }

    /// `schedule` filtered to `week` (None = this week). Today is highlighted
    /// only while the shown week is the current one.
    pub fn week_view<'a>(&self, schedule: &'a Schedule, week: Option<u32>) -> WeekView<'a> {
        let today = self.clock().today();
        let current = WeekState::resolve(self.week1_date(), self.final_week, today);
        let state = match week {
            Some(w) => WeekState::for_week(Some(w), self.final_week),
            None => current.clone(),
        };
        let today_column = if state.week_number.is_some() && state.week_number == current.week_number {
            clock::today_column(today)
        } else {
            None
        };
        WeekView::new(schedule, state, self.final_week, today_column)
    }
}

/// Parse `"08:00-08:45, 08:55-09:40"` into periods numbered from 1.
pub fn parse_period_table(text: &str) -> Result<Vec<Period>, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    for part in text.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let (start, end) = part
            .split_once(['-', '–'])
            .ok_or_else(|| format!("Invalid period (want HH:MM-HH:MM): {part}"))?;
        let (start, end) = (start.trim(), end.trim());
        if !looks_like_clock(start) || !looks_like_clock(end) {
            return Err(format!("Invalid period (want HH:MM-HH:MM): {part}").into());
        }
        out.push(Period { p: out.len() as u32 + 1, start: s!(start), end: s!(end) });
    }
    if out.is_empty() {
        return Err("Period table is empty".into());
    }
    Ok(out)
}

fn looks_like_clock(s: &str) -> bool {
    match s.split_once(':') {
        Some((h, m)) => {
            !h.is_empty() && h.len() <= 2 && m.len() == 2
                && h.bytes().all(|b| b.is_ascii_digit())
                && m.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Weekly page: grid with spans + day list, data payload embedded.
    Html,
    /// Full-term page in the structured-document layout (every cell listed).
    Snapshot,
    Csv,
    Tsv,
    Json,
    /// Plain weekly list, one line per session.
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Html,
        ExportFormat::Snapshot,
        ExportFormat::Csv,
        ExportFormat::Tsv,
        ExportFormat::Json,
        ExportFormat::Text,
    ];

    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Html | ExportFormat::Snapshot => "html",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }

    /// Appended to the file stem so both HTML flavors can share a directory.
    pub fn stem_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Snapshot => "-pretty",
            _ => "",
        }
    }

    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "HTML",
            ExportFormat::Snapshot => "Snapshot",
            ExportFormat::Csv => "CSV",
            ExportFormat::Tsv => "TSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Text => "Text",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "html" => Some(ExportFormat::Html),
            "snapshot" | "pretty" => Some(ExportFormat::Snapshot),
            "csv" => Some(ExportFormat::Csv),
            "tsv" => Some(ExportFormat::Tsv),
            "json" => Some(ExportFormat::Json),
            "text" | "txt" => Some(ExportFormat::Text),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Html,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(&*stem, self.format.stem_suffix(), ".", self.format.ext()));
        path
    }

    /// Parse GUI/CLI text into dir + stem. Ignores a pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            let stem = stem.to_string_lossy();
            let stem = stem.strip_suffix(self.format.stem_suffix()).unwrap_or(&stem);
            self.out_path.file_stem = OsString::from(stem);
        }
    }

    /// Use a (sanitized) schedule title as the file stem, keeping the directory.
    pub fn set_stem(&mut self, stem: &str) {
        self.out_path.file_stem = OsString::from(stem);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
        }
    }
}
