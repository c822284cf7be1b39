use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use day_layout::event::DayEvent;
use day_layout::{get_day_window, layout_day_events};
use std::hint::black_box;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(7, 0, 0)
        .unwrap()
}

/// A busy clinic day: staggered 15-90 minute appointments with heavy overlap.
fn clinic_day(n: usize) -> Vec<DayEvent> {
    (0..n)
        .map(|i| {
            let offset = (i as i64 * 37) % 600;
            let length = 15 + (i as i64 * 13) % 76;
            let start = base() + Duration::minutes(offset);
            DayEvent::new(start, start + Duration::minutes(length))
        })
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_day_events");
    for &n in &[10usize, 100, 1_000] {
        let events = clinic_day(n);
        let window = get_day_window(&events);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &events, |b, events| {
            b.iter(|| {
                layout_day_events(
                    black_box(events),
                    window.window_start,
                    window.window_end,
                )
            })
        });
    }
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let events = clinic_day(1_000);
    c.bench_function("get_day_window/1000", |b| {
        b.iter(|| get_day_window(black_box(&events)))
    });
}

criterion_group!(benches, bench_layout, bench_window);
criterion_main!(benches);
