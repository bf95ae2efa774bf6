// tests/decode.rs
//
// Slot decoder: dimension resolution, index mapping, grid filling.
//
use timetable_grid::config::consts::MAX_PERIODS;
use timetable_grid::engine::decode::{
    decode, decode_with, resolve_dims, slot_position, DecodeHints, DecodeMode, Linearization,
};
use timetable_grid::model::Activity;

fn act(name: &str) -> Activity {
    Activity { course_name: name.into(), ..Activity::default() }
}

fn slots(len: usize, filled: &[(usize, &str)]) -> Vec<Vec<Activity>> {
    let mut v = vec![Vec::new(); len];
    for &(i, name) in filled {
        v[i].push(act(name));
    }
    v
}

#[test]
fn unit_count_hint_wins_over_length() {
    let hints = DecodeHints { unit_count: Some(12), ..DecodeHints::default() };
    assert_eq!(resolve_dims(84, &hints, None), (12, 7));
}

#[test]
fn unit_counts_divided_by_default_days() {
    let hints = DecodeHints { unit_counts: Some(84), ..DecodeHints::default() };
    assert_eq!(resolve_dims(84, &hints, None), (12, 7));

    let sat = DecodeHints { unit_counts: Some(72), end_at_sat: true, ..DecodeHints::default() };
    assert_eq!(resolve_dims(72, &sat, None), (12, 6));
}

#[test]
fn length_only_guess_rounds_half_up() {
    // 60 / 7 = 8.57 → 9 periods, 60 / 9 = 6.67 → 7 days
    assert_eq!(resolve_dims(60, &DecodeHints::default(), None), (9, 7));

    let sat = DecodeHints { end_at_sat: true, ..DecodeHints::default() };
    assert_eq!(resolve_dims(60, &sat, None), (10, 6));
}

#[test]
fn fixed_period_table_overrides_hints() {
    let hints = DecodeHints { unit_count: Some(10), ..DecodeHints::default() };
    assert_eq!(resolve_dims(84, &hints, Some(12)), (12, 7));
}

#[test]
fn zero_hints_count_as_absent() {
    let hints = DecodeHints { unit_count: Some(0), unit_counts: Some(0), end_at_sat: false };
    assert_eq!(resolve_dims(70, &hints, Some(0)), (10, 7));
}

#[test]
fn implausible_inferred_days_fall_back() {
    // 36 slots of 12 periods would be 3 days
    let hints = DecodeHints { unit_count: Some(12), ..DecodeHints::default() };
    assert_eq!(resolve_dims(36, &hints, None), (12, 7));

    let sat = DecodeHints { unit_count: Some(12), end_at_sat: true, ..DecodeHints::default() };
    assert_eq!(resolve_dims(36, &sat, None), (12, 6));
}

#[test]
fn tiny_arrays_still_get_one_period() {
    assert_eq!(resolve_dims(1, &DecodeHints::default(), None).0, 1);
}

#[test]
fn huge_count_hints_fall_through() {
    let max = DecodeHints { unit_counts: Some(usize::MAX), ..DecodeHints::default() };
    assert_eq!(resolve_dims(84, &max, None), (12, 7));

    let both = DecodeHints { unit_count: Some(usize::MAX), unit_counts: Some(usize::MAX), end_at_sat: true };
    assert_eq!(resolve_dims(72, &both, None), (12, 6));

    // unit_count too large → unit_counts still gets its turn
    let next = DecodeHints { unit_count: Some(1_000_000_000_000), unit_counts: Some(84), end_at_sat: false };
    assert_eq!(resolve_dims(2, &next, None), (12, 7));

    assert_eq!(resolve_dims(84, &DecodeHints::default(), Some(usize::MAX)), (12, 7));
}

#[test]
fn long_arrays_are_capped_at_max_periods() {
    let (pc, dc) = resolve_dims(usize::MAX, &DecodeHints::default(), None);
    assert_eq!(pc, MAX_PERIODS);
    assert_eq!(dc, 7);
}

#[test]
fn period_hint_larger_than_the_array_stays_bounded() {
    let v = slots(2, &[(0, "A"), (1, "B")]);
    for unit_count in [Some(5_000_000), Some(1_000_000_000_000), Some(usize::MAX)] {
        let hints = DecodeHints { unit_count, ..DecodeHints::default() };
        let grid = decode(&v, &hints).unwrap();
        assert!(grid.period_count <= MAX_PERIODS);
        assert_eq!(grid.cells.len(), grid.period_count);
        assert!(grid.cells.iter().all(|row| row.len() == grid.day_count));
        assert_eq!(grid.occupied(), 2);
    }

    // a plausible hint beyond the array length is still honoured
    let hints = DecodeHints { unit_count: Some(12), ..DecodeHints::default() };
    let grid = decode(&v, &hints).unwrap();
    assert_eq!((grid.period_count, grid.day_count), (12, 7));
    assert_eq!(grid.cell(1, 0)[0].course_name, "B");
}

#[test]
fn slot_position_both_orders() {
    assert_eq!(slot_position(13, 12, 7, Linearization::DayMajor), Some((1, 1)));
    assert_eq!(slot_position(13, 12, 7, Linearization::PeriodMajor), Some((1, 6)));
    assert_eq!(slot_position(0, 12, 7, Linearization::DayMajor), Some((0, 0)));
    // day 7 does not exist
    assert_eq!(slot_position(84, 12, 7, Linearization::DayMajor), None);
    assert_eq!(slot_position(84, 12, 7, Linearization::PeriodMajor), None);
}

#[test]
fn empty_input_decodes_to_nothing() {
    assert!(decode(&[], &DecodeHints::default()).is_none());
}

#[test]
fn day_major_fills_columns() {
    let hints = DecodeHints { unit_count: Some(12), ..DecodeHints::default() };
    let grid = decode(&slots(84, &[(12, "A"), (13, "A"), (83, "Z")]), &hints).unwrap();

    assert_eq!((grid.period_count, grid.day_count), (12, 7));
    assert_eq!(grid.cell(0, 1)[0].course_name, "A");
    assert_eq!(grid.cell(1, 1)[0].course_name, "A");
    assert_eq!(grid.cell(11, 6)[0].course_name, "Z");
    assert!(grid.cell(0, 0).is_empty());
    assert!(grid.cell(99, 99).is_empty());

    let tue: Vec<u32> = grid.day_column(1).map(|(p, _)| p).collect();
    assert_eq!(tue, vec![1, 2]);
    assert_eq!(grid.occupied(), 3);
}

#[test]
fn period_major_fills_rows() {
    let hints = DecodeHints { unit_count: Some(12), ..DecodeHints::default() };
    let mode = DecodeMode { linearization: Linearization::PeriodMajor, fixed_periods: None };
    let grid = decode_with(&slots(84, &[(1, "B"), (8, "B")]), &hints, &mode).unwrap();

    // i=1 → period 1, Tuesday; i=8 → period 2, Tuesday
    let tue: Vec<u32> = grid.day_column(1).map(|(p, _)| p).collect();
    assert_eq!(tue, vec![1, 2]);
}

#[test]
fn slots_outside_the_grid_are_dropped() {
    let hints = DecodeHints { unit_count: Some(12), ..DecodeHints::default() };
    // 86 / 12 → 7 days; the last two slots would be an eighth day
    let grid = decode(&slots(86, &[(0, "A"), (85, "X")]), &hints).unwrap();
    assert_eq!(grid.day_count, 7);
    assert_eq!(grid.occupied(), 1);
}

#[test]
fn several_activities_share_a_slot() {
    let mut v = slots(84, &[(0, "A")]);
    v[0].push(act("B"));
    let grid = decode(&v, &DecodeHints { unit_count: Some(12), ..DecodeHints::default() }).unwrap();
    let names: Vec<&str> = grid.cell(0, 0).iter().map(|a| a.course_name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn decoded_positions_stay_in_bounds() {
    for len in 1..=120 {
        for end_at_sat in [false, true] {
            for unit_count in [None, Some(0), Some(5), Some(12), Some(20), Some(usize::MAX)] {
                let hints = DecodeHints { unit_count, unit_counts: Some(usize::MAX), end_at_sat };
                let (pc, dc) = resolve_dims(len, &hints, None);
                for lin in [Linearization::DayMajor, Linearization::PeriodMajor] {
                    for i in 0..len {
                        if let Some((p, d)) = slot_position(i, pc, dc, lin) {
                            assert!(p < pc && d < dc);
                        }
                    }
                }
                let grid = decode(&vec![vec![act("x")]; len], &hints).unwrap();
                assert!(grid.occupied() <= pc * dc);
                assert_eq!(grid.cells.len(), pc);
                assert!(pc <= MAX_PERIODS);
            }
        }
    }
}
