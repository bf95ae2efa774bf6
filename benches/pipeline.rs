// benches/pipeline.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use timetable_grid::{
    engine::WeekView,
    model::{Activity, WeekState},
    render::snapshot::render_snapshot,
    specs::{document::parse_document, FlatExport, ScheduleSource, SourceContext},
};

/// Dense synthetic term: 12 periods × 7 days, two-period blocks, a few parallel courses.
fn synthetic_export() -> FlatExport {
    let mut activities = vec![Vec::new(); 84];
    for (i, slot) in activities.iter_mut().enumerate() {
        let (day, period) = (i / 12, i % 12);
        if period % 4 == 3 {
            continue;
        }
        let block = period / 2;
        slot.push(Activity {
            course_id: format!("{day}{block}"),
            course_name: format!("课程{day}-{block}"),
            teacher_name: s_teacher(block),
            room_name: format!("A{}0{}", day + 1, block),
            valid_weeks: if block % 2 == 0 { "01111111100000000".into() } else { "00000000011111111".into() },
        });
        if day == 2 {
            slot.push(Activity { course_name: "实验".into(), valid_weeks: "01111111111111111".into(), ..Activity::default() });
        }
    }
    FlatExport { activities, unit_count: Some(12), ..FlatExport::default() }
}

fn s_teacher(block: usize) -> String {
    ["王老师", "李老师", "赵老师"][block % 3].to_string()
}

fn bench_pipeline(c: &mut Criterion) {
    let flat = synthetic_export();
    let ctx = SourceContext::default();
    let schedule = flat.to_schedule(&ctx).expect("synthetic export decodes");
    let snapshot = render_snapshot(&schedule);

    c.bench_function("flat_to_schedule", |b| {
        b.iter(|| {
            let s = black_box(&flat).to_schedule(black_box(&ctx));
            black_box(s.map(|s| s.session_count()))
        })
    });

    c.bench_function("week_layout", |b| {
        b.iter(|| {
            let view = WeekView::new(black_box(&schedule), WeekState::for_week(Some(3), 17), 17, Some(1));
            black_box(view.layout().span_count())
        })
    });

    c.bench_function("document_parse", |b| {
        b.iter(|| {
            let s = parse_document(black_box(&snapshot));
            black_box(s.map(|s| s.days.len()))
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
