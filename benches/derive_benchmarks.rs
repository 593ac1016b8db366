use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::Utc;
use termdots::engine::compute_derived;
use termdots::engine::reference::ReferenceDates;

fn bench_compute(c: &mut Criterion) {
    let refs = ReferenceDates::in_zone(&Utc).expect("dates resolve");
    let now = refs.first_end + chrono::Duration::days(400);

    c.bench_function("compute_derived", |b| {
        b.iter(|| compute_derived(black_box(now), black_box(&refs)))
    });
}

fn bench_classify(c: &mut Criterion) {
    let refs = ReferenceDates::in_zone(&Utc).expect("dates resolve");
    let state = compute_derived(refs.first_end + chrono::Duration::days(400), &refs);

    c.bench_function("classify full dot row", |b| {
        b.iter(|| black_box(state.progress.dots()).filter(|d| d.is_current()).count())
    });
}

criterion_group!(benches, bench_compute, bench_classify);
criterion_main!(benches);
