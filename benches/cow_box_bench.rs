//! Benchmarks contrasting in-place appends with appends that copy.

use std::hint::black_box;

use cowbox::cow::CowBox;
use criterion::{Criterion, criterion_group, criterion_main};

fn bench_exclusive_push(criterion: &mut Criterion) {
    criterion.bench_function("push_exclusive_1000", |bencher| {
        bencher.iter(|| {
            let mut cow_box: CowBox<u64> = CowBox::new();
            for element in 0..1000_u64 {
                cow_box.push(black_box(element));
            }
            cow_box
        });
    });
}

fn bench_push_under_sharing(criterion: &mut Criterion) {
    let origin: CowBox<u64> = (0..1000_u64).collect();
    criterion.bench_function("push_after_share_1000", |bencher| {
        bencher.iter(|| {
            let mut writer = origin.clone();
            writer.push(black_box(7));
            writer
        });
    });
}

fn bench_push_shared(criterion: &mut Criterion) {
    criterion.bench_function("push_shared_1000", |bencher| {
        bencher.iter(|| {
            let cow_box: CowBox<u64> = CowBox::new();
            let alias = cow_box.clone();
            for element in 0..1000_u64 {
                alias.push_shared(black_box(element));
            }
            cow_box
        });
    });
}

criterion_group!(
    benches,
    bench_exclusive_push,
    bench_push_under_sharing,
    bench_push_shared
);
criterion_main!(benches);
