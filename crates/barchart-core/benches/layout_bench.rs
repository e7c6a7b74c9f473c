use barchart_core::{ChartConfig, ChartLayout, DataPoint};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_data(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint::new(format!("item {i}"), ((i as f64 * 0.37).sin() + 1.1) * 50.0))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_compute");
    let cfg = ChartConfig::new(1200.0, 800.0);
    for &n in &[12usize, 500, 10_000] {
        let data = build_data(n);
        group.bench_function(format!("bars_{n}"), |b| {
            b.iter(|| ChartLayout::compute(black_box(&cfg), black_box(&data)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
