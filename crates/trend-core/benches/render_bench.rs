use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trend_core::{normalize, NamedSeries, PriceTrendChart, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let supplier: Vec<NamedSeries> = (0..3)
        .map(|i| NamedSeries::from_pairs(format!("S{i}"), (1..=12).map(|m| (format!("2024-{m:02}"), 100.0 + (m * i) as f64))))
        .collect();
    let market = vec![NamedSeries::from_pairs("Index", (1..=12).map(|m| (format!("2024-{m:02}"), 110.0 + m as f64)))];
    let data = normalize(&supplier, &market);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };

    c.bench_function("render_png_bytes_12m", |b| {
        b.iter(|| black_box(PriceTrendChart::new(&data).render_to_png_bytes(&opts).ok()))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
