// src/specs/flat.rs
//
// Raw slot export:
//   { "activities": [[{courseName, teacherName, roomName, vaildWeeks, ...}], [], ...],
//     "unitCount": 12, "unitCounts": 84, "endAtSat": false, "semester": "2025-2026-2" }
// A bare top-level array is accepted as `activities`.

use serde::{Deserialize, Deserializer};

use super::{day_id, day_label, ScheduleSource, SourceContext};
use crate::config::consts::{DEFAULT_TITLE, TITLE_SEP, UNNAMED_COURSE};
use crate::engine::decode::{decode_with, DecodeHints, DecodeMode, SlotGrid};
use crate::engine::merge::{build_sessions, PeriodCells};
use crate::engine::week::weeks_text_from_bits;
use crate::model::{Activity, Day, Meta, Occurrence, Period, Schedule};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatExport {
    #[serde(default, deserialize_with = "nullable_slots")]
    pub activities: Vec<Vec<Activity>>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub unit_count: Option<usize>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub unit_counts: Option<usize>,
    #[serde(default)]
    pub end_at_sat: Option<bool>,
    #[serde(default)]
    pub semester: Option<String>,
}

/// `null` slots read as empty.
fn nullable_slots<'de, D>(de: D) -> Result<Vec<Vec<Activity>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Vec<Activity>>>> = Option::deserialize(de)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}

/// Counts arrive as integers, floats, numeric strings or null.
fn lenient_count<'de, D>(de: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Int(u64),
        Float(f64),
        Text(String),
        Null(()),
    }

    Ok(match Count::deserialize(de)? {
        Count::Int(n) => usize::try_from(n).ok(),
        Count::Float(f) if f.is_finite() && f >= 0.0 => Some(f.round() as usize),
        Count::Text(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl FlatExport {
    pub fn from_json(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, Box<dyn std::error::Error>> {
        if value.is_array() {
            let activities = serde_json::from_value::<Vec<Option<Vec<Activity>>>>(value)?
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect();
            return Ok(Self { activities, ..Self::default() });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn hints(&self) -> DecodeHints {
        DecodeHints {
            unit_count: self.unit_count,
            unit_counts: self.unit_counts,
            end_at_sat: self.end_at_sat.unwrap_or(false),
        }
    }

    pub fn title(&self) -> String {
        match self.semester.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(sem) => join!(DEFAULT_TITLE, TITLE_SEP, sem),
            None => s!(DEFAULT_TITLE),
        }
    }

    pub fn decode(&self, ctx: &SourceContext) -> Option<SlotGrid> {
        let mode = DecodeMode {
            linearization: ctx.linearization,
            fixed_periods: ctx.period_table.as_ref().map(Vec::len),
        };
        decode_with(&self.activities, &self.hints(), &mode)
    }
}

/// Slot entry → display text used for session identity.
pub fn occurrence(a: &Activity) -> Occurrence {
    let name = a.course_name.trim();
    Occurrence {
        course_name: s!(if name.is_empty() { UNNAMED_COURSE } else { name }),
        teacher_name: s!(a.teacher_name.trim()),
        room_name: s!(a.room_name.trim()),
        valid_weeks_text: weeks_text_from_bits(&a.valid_weeks),
    }
}

/// Period rows for `count` periods, taking clock times from the table when given.
fn period_rows(count: usize, table: Option<&[Period]>) -> Vec<Period> {
    (1..=count as u32)
        .map(|p| match table.and_then(|t| t.get(p as usize - 1)) {
            Some(known) => Period { p, ..known.clone() },
            None => Period::numbered(p),
        })
        .collect()
}

impl ScheduleSource for FlatExport {
    fn label(&self) -> &'static str { "flat slot export" }

    fn to_schedule(&self, ctx: &SourceContext) -> Option<Schedule> {
        let grid = self.decode(ctx)?;
        let period_count = grid.period_count as u32;

        let days: Vec<Day> = (0..grid.day_count)
            .map(|d| {
                let cells: PeriodCells = grid
                    .day_column(d)
                    .map(|(p, acts)| (p, acts.iter().map(occurrence).collect()))
                    .collect();
                Day {
                    id: day_id(d),
                    label: day_label(d),
                    sessions: build_sessions(&cells, period_count),
                }
            })
            .collect();

        let mut schedule = Schedule {
            title: self.title(),
            meta: Meta {
                course_count: 0,
                period_count,
                exported_at: ctx.exported_at.clone(),
            },
            periods: period_rows(grid.period_count, ctx.period_table.as_deref()),
            days,
        };
        schedule.meta.course_count = schedule.distinct_courses() as u32;

        logf!(
            "Flat: slots={} occupied={} → days={} periods={} sessions={} courses={}",
            self.activities.len(),
            grid.occupied(),
            schedule.days.len(),
            period_count,
            schedule.session_count(),
            schedule.meta.course_count
        );
        Some(schedule)
    }
}
