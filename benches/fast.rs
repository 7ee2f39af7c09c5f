use harmonia::fast::oneshot;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

pub fn bench_fast(c: &mut Criterion) {
    c.bench_function("harmonia fast 64 bytes", |b| {
        b.iter(|| oneshot(black_box(&[0u8; 64])))
    });
    c.bench_function("harmonia fast 1 KiB", |b| {
        b.iter(|| oneshot(black_box(&[0u8; 1024])))
    });
    c.bench_function("harmonia fast 1 MiB", |b| {
        let data = vec![0u8; 1024 * 1024];
        b.iter(|| oneshot(black_box(&data)))
    });
}

criterion_group!(benches, bench_fast);
criterion_main!(benches);
