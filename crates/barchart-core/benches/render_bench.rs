use barchart_core::{BarChart, ChartConfig, DataPoint, FixedColors, Page, Rgba, SvgSurface, Theme};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_data(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint::new(format!("{i}"), (i % 97) as f64 + 1.0))
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::default();
    for &n in &[12usize, 1_000] {
        let data = build_data(n);
        group.bench_function(format!("bars_{n}"), |b| {
            b.iter(|| {
                let mut page: Page<SvgSurface> = Page::new().with_target("chart");
                let mut colors = FixedColors::new(vec![Rgba::rgb(40, 120, 200)]);
                BarChart::create_with(&mut page, "chart", ChartConfig::new(800.0, 500.0), &theme, data.clone(), &mut colors)
                    .unwrap();
                black_box(page.target("chart").unwrap().children()[0].to_svg_string());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
