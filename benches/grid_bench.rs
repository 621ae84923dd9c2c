// Benchmark for grid building and navigation
// Measures a full view rebuild with growing event lists

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use month_calendar::models::calendar::ViewedInstant;
use month_calendar::models::event_list::EventList;
use month_calendar::services::calendar::calendar_facts;
use month_calendar::services::clock::FixedClock;
use month_calendar::services::grid::build_view;
use month_calendar::services::navigation::MonthCalendar;

fn event_list(count: i64) -> EventList {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut events = EventList::new();
    for offset in 0..count {
        events.mark(start + Duration::days(offset));
    }
    events
}

fn bench_build_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_view");
    let viewed = ViewedInstant::new(
        NaiveDate::from_ymd_opt(2024, 5, 14)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    )
    .unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();

    for count in [0, 100, 1000].iter() {
        let events = event_list(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
            b.iter(|| build_view(&calendar_facts(black_box(viewed)), events, black_box(today)));
        });
    }

    group.finish();
}

fn bench_year_navigation(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 5, 14)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let mut calendar = MonthCalendar::new(Box::new(FixedClock(now)), event_list(365));

    c.bench_function("next_then_prev_year", |b| {
        b.iter(|| {
            black_box(calendar.next_year());
            black_box(calendar.prev_year());
        });
    });
}

criterion_group!(benches, bench_build_view, bench_year_navigation);
criterion_main!(benches);
