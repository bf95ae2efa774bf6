// tests/merge.rs
//
// Session merger: vertical runs of identical occurrences become one session.
//
use timetable_grid::engine::merge::{build_sessions, PeriodCells};
use timetable_grid::model::{Occurrence, Session};

fn occ(name: &str, room: &str) -> Occurrence {
    Occurrence {
        course_name: name.into(),
        teacher_name: "王老师".into(),
        room_name: room.into(),
        valid_weeks_text: "1-16周".into(),
    }
}

fn cells(entries: &[(u32, Vec<Occurrence>)]) -> PeriodCells {
    entries.iter().cloned().collect()
}

fn spans(sessions: &[Session]) -> Vec<(&str, u32, u32)> {
    sessions.iter().map(|s| (s.course_name.as_str(), s.p_from, s.p_to)).collect()
}

#[test]
fn adjacent_periods_merge() {
    let c = cells(&[(1, vec![occ("高数", "A101")]), (2, vec![occ("高数", "A101")])]);
    let out = build_sessions(&c, 12);
    assert_eq!(spans(&out), vec![("高数", 1, 2)]);
    assert_eq!(out[0].teacher_name, "王老师");
    assert_eq!(out[0].valid_weeks_text, "1-16周");
}

#[test]
fn gap_starts_a_new_session() {
    let c = cells(&[(1, vec![occ("高数", "A101")]), (3, vec![occ("高数", "A101")])]);
    assert_eq!(spans(&build_sessions(&c, 12)), vec![("高数", 1, 1), ("高数", 3, 3)]);
}

#[test]
fn different_room_breaks_the_run() {
    let c = cells(&[(1, vec![occ("高数", "A101")]), (2, vec![occ("高数", "B202")])]);
    let out = build_sessions(&c, 12);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].room_name, "B202");
}

#[test]
fn parallel_courses_merge_independently() {
    let both = vec![occ("英语", "A1"), occ("体育", "操场")];
    let c = cells(&[(3, both.clone()), (4, both)]);
    assert_eq!(spans(&build_sessions(&c, 12)), vec![("英语", 3, 4), ("体育", 3, 4)]);
}

#[test]
fn duplicate_in_one_cell_counts_once() {
    let c = cells(&[(1, vec![occ("高数", "A101"), occ("高数", "A101")]), (2, vec![occ("高数", "A101")])]);
    assert_eq!(spans(&build_sessions(&c, 12)), vec![("高数", 1, 2)]);
}

#[test]
fn discovery_order_is_kept() {
    let c = cells(&[(1, vec![occ("B", "x")]), (2, vec![occ("A", "x"), occ("B", "x")])]);
    assert_eq!(spans(&build_sessions(&c, 12)), vec![("B", 1, 2), ("A", 2, 2)]);
}

#[test]
fn periods_past_the_count_are_ignored() {
    let c = cells(&[(4, vec![occ("高数", "A101")]), (5, vec![occ("高数", "A101")])]);
    assert_eq!(spans(&build_sessions(&c, 4)), vec![("高数", 4, 4)]);
}

#[test]
fn empty_day_has_no_sessions() {
    assert!(build_sessions(&PeriodCells::new(), 12).is_empty());
}

#[test]
fn reappearing_course_is_a_new_session() {
    let a = || vec![occ("高数", "A101")];
    let c = cells(&[(1, a()), (2, a()), (3, a()), (4, vec![occ("英语", "B202")]), (6, a())]);
    let out = build_sessions(&c, 12);
    assert_eq!(spans(&out), vec![("高数", 1, 3), ("英语", 4, 4), ("高数", 6, 6)]);
    assert_eq!(out[0].span(), 3);
}

#[test]
fn concurrent_courses_keep_slot_order() {
    let c = cells(&[(1, vec![occ("A", "x"), occ("B", "x")]), (2, vec![occ("A", "x")])]);
    assert_eq!(spans(&build_sessions(&c, 12)), vec![("A", 1, 2), ("B", 1, 1)]);
}
