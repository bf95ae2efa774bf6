// tests/cli_args.rs
//
// Argument parsing and an end-to-end run against a temp directory.
//
use std::path::PathBuf;
use timetable_grid::cli::{parse_args, run, Params};
use timetable_grid::config::options::ExportFormat;
use timetable_grid::engine::decode::Linearization;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("timetable_grid_tests_{}_{}", name, std::process::id()));
    let _ = std::fs::create_dir_all(&p);
    p
}

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn defaults() {
    let p = parse_args(Vec::<String>::new()).unwrap();
    assert_eq!(p, Params::default());
    assert_eq!(p.format, ExportFormat::Text);
    assert_eq!(p.term.final_week, 17);
    assert_eq!(p.term.week1_start, "2026-03-02");
    assert!(p.include_headers);
}

#[test]
fn all_flags() {
    let p = parse_args(args(&[
        "-i", "in.json",
        "--format", "CSV",
        "-o", "out/",
        "--term-start", "2026-09-07",
        "--final-week", "18",
        "--today", "2026-09-20",
        "--week", "3",
        "--periods", "08:00-08:45,08:55-09:40",
        "--period-major",
        "--no-headers",
        "--all-weeks",
    ]))
    .unwrap();

    assert_eq!(p.input, Some(PathBuf::from("in.json")));
    assert_eq!(p.format, ExportFormat::Csv);
    assert_eq!(p.out.as_deref(), Some("out/"));
    assert_eq!(p.term.week1_start, "2026-09-07");
    assert_eq!(p.term.final_week, 18);
    assert_eq!(p.term.debug_today.as_deref(), Some("2026-09-20"));
    assert_eq!(p.week, Some(3));
    assert_eq!(p.term.period_table.as_ref().map(Vec::len), Some(2));
    assert_eq!(p.term.linearization, Linearization::PeriodMajor);
    assert!(!p.include_headers);
    assert!(p.all_weeks);
}

#[test]
fn bad_input_is_rejected() {
    assert!(parse_args(args(&["--format", "pdf"])).is_err());
    assert!(parse_args(args(&["--term-start", "next monday"])).is_err());
    assert!(parse_args(args(&["--week", "0"])).is_err());
    assert!(parse_args(args(&["--week", "x"])).is_err());
    assert!(parse_args(args(&["--periods", "8-9"])).is_err());
    assert!(parse_args(args(&["--input"])).is_err());
    assert!(parse_args(args(&["--frobnicate"])).is_err());
}

#[test]
fn help_flag_short_circuits() {
    let p = parse_args(args(&["-h"])).unwrap();
    assert!(p.show_help);
    run(p).unwrap();
}

#[test]
fn missing_input_is_an_error() {
    assert!(run(Params::default()).is_err());
}

#[test]
fn run_writes_the_requested_format() {
    let dir = tmp_dir("cli_run");
    let input = dir.join("flat.json");
    // 12 periods × 7 days, one course on Monday periods 1–2, weeks 1–16
    let mut slots = vec![String::from("[]"); 84];
    let act = r#"[{"courseName":"高等数学","teacherName":"王老师","roomName":"A101","vaildWeeks":"01111111111111111"}]"#;
    slots[0] = act.to_string();
    slots[1] = act.to_string();
    std::fs::write(&input, format!(r#"{{"activities":[{}],"unitCount":12}}"#, slots.join(","))).unwrap();

    let out = dir.join("week.csv");
    let p = parse_args(args(&[
        "--input", &input.display().to_string(),
        "--format", "csv",
        "--today", "2026-03-04",
        "-o", &out.display().to_string(),
    ]))
    .unwrap();
    run(p).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("周一,1-2,,高等数学,王老师,A101,1-16周"));

    // week 20 is past the final week: header only
    let late = dir.join("late.csv");
    let p = parse_args(args(&[
        "--input", &input.display().to_string(),
        "--format", "csv",
        "--week", "20",
        "-o", &late.display().to_string(),
    ]))
    .unwrap();
    run(p).unwrap();
    assert_eq!(std::fs::read_to_string(&late).unwrap().lines().count(), 1);
}
