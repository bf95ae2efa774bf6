// tests/flat.rs
//
// Raw slot export → Schedule, input sniffing, and the snapshot round trip.
//
use serde_json::{json, Value};
use std::path::PathBuf;
use timetable_grid::config::options::parse_period_table;
use timetable_grid::model::Schedule;
use timetable_grid::render::snapshot::render_snapshot;
use timetable_grid::specs::document::parse_document;
use timetable_grid::specs::{read_input, FlatExport, Input, ScheduleSource, SourceContext};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("timetable_grid_tests_{}_{}", name, std::process::id()));
    let _ = std::fs::create_dir_all(&p);
    p
}

const WEEKS_1_16: &str = "01111111111111111000000";

fn slot(name: &str, teacher: &str, room: &str) -> Value {
    json!({ "courseId": 1001, "courseName": name, "teacherName": teacher, "roomName": room, "vaildWeeks": WEEKS_1_16 })
}

/// 12 periods × 7 days, day-major: index = day * 12 + (period - 1).
fn export(filled: &[(usize, u32, Value)]) -> Value {
    let mut slots = vec![json!([]); 84];
    for (day, period, v) in filled {
        let i = day * 12 + (*period as usize - 1);
        slots[i].as_array_mut().unwrap().push(v.clone());
    }
    json!({ "activities": slots, "unitCount": 12, "endAtSat": false, "semester": "2025-2026-2" })
}

fn sample() -> FlatExport {
    FlatExport::from_value(export(&[
        (0, 1, slot("高等数学", "王老师", "A101")),
        (0, 2, slot("高等数学", "王老师", "A101")),
        (1, 3, slot("英语", "", "B202")),
        (1, 4, slot("英语", "", "B202")),
        (1, 4, slot("体育", "赵老师", "操场")),
        (5, 1, slot("周末课", "李老师", "C1")),
    ]))
    .unwrap()
}

fn ctx() -> SourceContext {
    SourceContext { exported_at: "2026-03-01 10:00".into(), ..SourceContext::default() }
}

#[test]
fn flat_export_becomes_sessions() {
    let s = sample().to_schedule(&ctx()).unwrap();

    assert_eq!(s.title, "课程表 · 2025-2026-2");
    assert_eq!(s.days.len(), 7);
    assert_eq!(s.days[5].label, "周六");
    assert_eq!(s.days[6].id, "sun");
    assert_eq!(s.periods.len(), 12);
    assert_eq!(s.periods[0].label(), "第1节");

    let mon = &s.days[0].sessions;
    assert_eq!(mon.len(), 1);
    assert_eq!((mon[0].p_from, mon[0].p_to), (1, 2));
    assert_eq!(mon[0].valid_weeks_text, "1-16周");
    assert_eq!(mon[0].detail(), "王老师 · A101");

    let tue: Vec<(&str, u32, u32)> =
        s.days[1].sessions.iter().map(|x| (x.course_name.as_str(), x.p_from, x.p_to)).collect();
    assert_eq!(tue, vec![("英语", 3, 4), ("体育", 4, 4)]);

    assert_eq!(s.meta.period_count, 12);
    assert_eq!(s.meta.course_count, 4);
    assert_eq!(s.meta.exported_at, "2026-03-01 10:00");
}

#[test]
fn period_table_supplies_times_and_count() {
    let mut c = ctx();
    c.period_table = Some(parse_period_table("08:00-08:45, 08:55-09:40, 10:00-10:45").unwrap());
    // 84 slots with 3 periods → 28 "days", so the default 7 is used instead
    let s = sample().to_schedule(&c).unwrap();
    assert_eq!(s.periods.len(), 3);
    assert_eq!(s.periods[1].label(), "第2节 08:55–09:40");
    assert_eq!(s.days.len(), 7);
}

#[test]
fn lenient_fields_and_bare_arrays() {
    let text = r#"[[{"courseName":"  物理 ","teacherName":null,"roomName":305,"validWeeks":"0110"}], null, []]"#;
    let flat = FlatExport::from_json(text).unwrap();
    assert_eq!(flat.activities.len(), 3);
    assert!(flat.activities[1].is_empty());

    let s = flat.to_schedule(&ctx()).unwrap();
    let first = &s.days[0].sessions[0];
    assert_eq!(first.course_name, "物理");
    assert_eq!(first.teacher_name, "");
    assert_eq!(first.room_name, "305");
    assert_eq!(first.valid_weeks_text, "1-2周");

    let counts = FlatExport::from_json(r#"{"activities":[[]],"unitCount":"12","unitCounts":84.0}"#).unwrap();
    assert_eq!((counts.unit_count, counts.unit_counts), (Some(12), Some(84)));
}

#[test]
fn absurd_count_hints_still_produce_a_schedule() {
    let flat = FlatExport::from_json(
        r#"{"activities":[[{"courseName":"化学"}],[]],"unitCount":1000000000000,"unitCounts":18446744073709551615}"#,
    )
    .unwrap();
    let s = flat.to_schedule(&ctx()).unwrap();
    // both hints rejected; 2 slots over 7 days rounds to one period
    assert_eq!(s.meta.period_count, 1);
    assert_eq!(s.periods.len(), 1);
    assert_eq!(s.days.len(), 7);
    assert_eq!(s.days[0].sessions[0].course_name, "化学");
}

#[test]
fn empty_export_has_nothing_to_render() {
    let flat = FlatExport::from_json(r#"{"activities":[]}"#).unwrap();
    assert!(flat.to_schedule(&ctx()).is_none());
}

#[test]
fn input_detection() {
    assert!(matches!(Input::detect(r#"{"activities":[]}"#).unwrap(), Input::Flat(_)));
    assert!(matches!(Input::detect("\u{feff} [[]]").unwrap(), Input::Flat(_)));
    assert!(matches!(Input::detect(r#"{"title":"x","days":[]}"#).unwrap(), Input::Normalized(_)));
    assert!(matches!(Input::detect("<html></html>").unwrap(), Input::Document(_)));
    assert!(Input::detect(r#"{"foo":1}"#).is_err());
    assert!(Input::detect("{ not json").is_err());
}

#[test]
fn read_input_from_files() {
    let dir = tmp_dir("read_input");
    let flat_path = dir.join("flat.json");
    std::fs::write(&flat_path, export(&[(2, 5, slot("化学", "钱老师", "D4"))]).to_string()).unwrap();
    let s = read_input(&flat_path, &ctx()).unwrap();
    assert_eq!(s.days[2].sessions[0].course_name, "化学");

    // normalized JSON reads back as-is, counts filled when missing
    let json_path = dir.join("schedule.json");
    let mut plain = s.clone();
    plain.meta.course_count = 0;
    std::fs::write(&json_path, serde_json::to_string(&plain).unwrap()).unwrap();
    let back = read_input(&json_path, &ctx()).unwrap();
    assert_eq!(back.days, s.days);
    assert_eq!(back.meta.course_count, 1);

    assert!(read_input(&dir.join("missing.json"), &ctx()).is_err());

    let empty_path = dir.join("empty.html");
    std::fs::write(&empty_path, "<p>nothing</p>").unwrap();
    assert!(read_input(&empty_path, &ctx()).is_err());
}

#[test]
fn snapshot_reads_back_as_the_same_weekdays() {
    let mut c = ctx();
    c.period_table = Some(parse_period_table("08:00-08:45,08:55-09:40,10:00-10:45,10:55-11:40,14:00-14:45,14:55-15:40,16:00-16:45,16:55-17:40,19:00-19:45,19:55-20:40,20:50-21:35,21:45-22:30").unwrap());
    let original: Schedule = sample().to_schedule(&c).unwrap();

    let html = render_snapshot(&original);
    let back = parse_document(&html).unwrap();

    assert_eq!(back.title, original.title);
    assert_eq!(back.periods, original.periods);
    assert_eq!(back.days[..], original.days[..5]);
    assert_eq!(back.meta, original.meta);
}
