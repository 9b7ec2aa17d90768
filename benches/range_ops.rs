use criterion::{Criterion, criterion_group, criterion_main};
use period_range::{Range, TimeRange, intersection, overlaps};
use std::hint::black_box;

fn shifts() -> Vec<TimeRange> {
    (0..64)
        .map(|i| {
            let text = format!("[2024-05-01T00:00:00Z,2024-05-{:02}T06:00:00Z)", 2 + i % 27);
            text.parse().unwrap()
        })
        .collect()
}

fn benchmark_parse(c: &mut Criterion) {
    c.bench_function("parse_time_range", |b| {
        b.iter(|| {
            let r: TimeRange = black_box("[2024-05-01T06:00:00Z,2024-05-01T14:00:00Z)")
                .parse()
                .unwrap();
            black_box(r);
        })
    });
}

fn benchmark_overlap_matrix(c: &mut Criterion) {
    let ranges = shifts();
    c.bench_function("overlap_matrix_64", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for a in &ranges {
                for other in &ranges {
                    hits += usize::from(overlaps(black_box(a), black_box(other)));
                }
            }
            black_box(hits);
        })
    });
}

fn benchmark_intersection(c: &mut Criterion) {
    let window: TimeRange = Range::closed_open(
        Some("2024-05-03T00:00:00Z".parse().unwrap()),
        Some("2024-05-10T00:00:00Z".parse().unwrap()),
    );
    let ranges = shifts();
    c.bench_function("clip_to_window", |b| {
        b.iter(|| {
            let clipped: Vec<TimeRange> =
                ranges.iter().map(|r| intersection(black_box(r), &window)).collect();
            black_box(clipped);
        })
    });
}

criterion_group!(benches, benchmark_parse, benchmark_overlap_matrix, benchmark_intersection);
criterion_main!(benches);
