// src/model.rs
//
// Normalized schedule model shared by both input adapters, the engine and the
// renderers. Serialized field names follow the captured data files.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::consts::{LABEL_POST_TERM, LABEL_PRE_TERM};
use crate::engine::week::current_week;

/// One raw slot entry of the upstream export.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient_string")]
    pub course_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub course_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub teacher_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub room_name: String,
    /// Week bit string, index 0 unused (`"0111100..."`).
    #[serde(default, alias = "vaildWeeks", deserialize_with = "lenient_string")]
    pub valid_weeks: String,
}

/// Accepts a string, a number or null.
fn lenient_string<'de, D>(de: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Text(String),
        Int(i64),
        Float(f64),
        Flag(bool),
        Null(()),
    }

    Ok(match Lenient::deserialize(de)? {
        Lenient::Text(s) => s,
        Lenient::Int(n) => n.to_string(),
        Lenient::Float(f) => f.to_string(),
        Lenient::Flag(b) => b.to_string(),
        Lenient::Null(()) => s!(),
    })
}

/// A course occurrence inside one period cell, already reduced to display text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Occurrence {
    pub course_name: String,
    pub teacher_name: String,
    pub room_name: String,
    pub valid_weeks_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// 1-based period number
    pub p: u32,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl Period {
    pub fn numbered(p: u32) -> Self {
        Self { p, start: s!(), end: s!() }
    }

    /// `第3节 10:00–10:45`
    pub fn label(&self) -> String {
        if self.start.is_empty() && self.end.is_empty() {
            format!("第{}节", self.p)
        } else {
            format!("第{}节 {}–{}", self.p, self.start, self.end)
        }
    }
}

/// Contiguous run of periods of one course on one day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "pFrom")]
    pub p_from: u32,
    #[serde(rename = "pTo")]
    pub p_to: u32,
    #[serde(rename = "name", default)]
    pub course_name: String,
    #[serde(rename = "teacher", default)]
    pub teacher_name: String,
    #[serde(rename = "room", default)]
    pub room_name: String,
    #[serde(rename = "weeks", default)]
    pub valid_weeks_text: String,
}

/// Identity used by the merger: name, teacher, room, weeks text.
pub type SessionKey = (String, String, String, String);

impl Occurrence {
    pub fn key(&self) -> SessionKey {
        (
            self.course_name.clone(),
            self.teacher_name.clone(),
            self.room_name.clone(),
            self.valid_weeks_text.clone(),
        )
    }
}

impl Session {
    pub fn open(p: u32, occ: &Occurrence) -> Self {
        Self {
            p_from: p,
            p_to: p,
            course_name: occ.course_name.clone(),
            teacher_name: occ.teacher_name.clone(),
            room_name: occ.room_name.clone(),
            valid_weeks_text: occ.valid_weeks_text.clone(),
        }
    }

    pub fn span(&self) -> u32 {
        self.p_to.saturating_sub(self.p_from) + 1
    }

    pub fn covers(&self, p: u32) -> bool {
        self.p_from <= p && p <= self.p_to
    }

    /// `teacher · room`, skipping empty parts.
    pub fn detail(&self) -> String {
        let parts: Vec<&str> = [self.teacher_name.as_str(), self.room_name.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        parts.join(crate::config::consts::META_SEP)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Borrowed, week-filtered view of a `Day`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayView<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub sessions: Vec<&'a Session>,
}

impl<'a> DayView<'a> {
    pub fn all(day: &'a Day) -> Self {
        Self { id: &day.id, label: &day.label, sessions: day.sessions.iter().collect() }
    }

    pub fn blank(day: &'a Day) -> Self {
        Self { id: &day.id, label: &day.label, sessions: Vec::new() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub course_count: u32,
    #[serde(default)]
    pub period_count: u32,
    #[serde(default)]
    pub exported_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub title: String,
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub days: Vec<Day>,
}

impl Schedule {
    /// Distinct (name, teacher, room) triples over every session.
    pub fn distinct_courses(&self) -> usize {
        let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
        for s in self.days.iter().flat_map(|d| d.sessions.iter()) {
            seen.insert((s.course_name.as_str(), s.teacher_name.as_str(), s.room_name.as_str()));
        }
        seen.len()
    }

    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermPhase {
    PreTerm,
    InTerm,
    PostTerm,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekState {
    /// Raw calculator output; may exceed the final week.
    pub week_number: Option<u32>,
    pub phase: TermPhase,
    pub label: String,
}

impl WeekState {
    /// Classify the week of `today`. A missing term start reads as pre-term.
    pub fn resolve(week1_start: Option<NaiveDate>, final_week: u32, today: NaiveDate) -> Self {
        let week = week1_start.and_then(|start| current_week(start, today));
        Self::for_week(week, final_week)
    }

    pub fn for_week(week_number: Option<u32>, final_week: u32) -> Self {
        let phase = match week_number {
            None => TermPhase::PreTerm,
            Some(w) if final_week > 0 && w > final_week => TermPhase::PostTerm,
            Some(_) => TermPhase::InTerm,
        };
        let label = match (phase, week_number) {
            (TermPhase::InTerm, Some(w)) => format!("第{w}周"),
            (TermPhase::PostTerm, _) => s!(LABEL_POST_TERM),
            _ => s!(LABEL_PRE_TERM),
        };
        Self { week_number, phase, label }
    }

    pub fn in_term(&self) -> bool {
        self.phase == TermPhase::InTerm
    }
}
