// File: crates/trend-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests, plus pixel checks that gaps stay gaps.

use trend_core::layout::{Insets, PlotRect};
use trend_core::{
    normalize, theme, AlignedSeries, AxisRange, NamedSeries, NormalizedChart, PriceTrendChart, RenderOptions,
    SeriesKind, Theme,
};

fn sample() -> (Vec<NamedSeries>, Vec<NamedSeries>) {
    let supplier = vec![
        NamedSeries::from_pairs("Supplier A", [("Jan 2024", 100.0), ("Mar 2024", 140.0), ("Apr 2024", 132.0)]),
        NamedSeries::from_pairs("Supplier B", [("Feb 2024", 110.0), ("Mar 2024", 125.0)]),
    ];
    let market = vec![NamedSeries::from_pairs(
        "Market index",
        [("Jan 2024", 105.0), ("Feb 2024", 120.0), ("Apr 2024", 128.0)],
    )];
    (supplier, market)
}

#[test]
fn render_smoke_png() {
    let (supplier, market) = sample();
    let data = normalize(&supplier, &market);

    let opts = RenderOptions { title: Some("Price trend 2024".into()), ..RenderOptions::default() };
    let out = std::path::PathBuf::from("target/test_out/price_trend.png");
    PriceTrendChart::new(&data).render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = PriceTrendChart::new(&data).render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_empty_chart() {
    let data = normalize(&[], &[]);
    let opts = RenderOptions { theme: theme::find("light"), ..RenderOptions::default() };
    let bytes = PriceTrendChart::new(&data).render_to_png_bytes(&opts).expect("empty chart renders");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
}

// ---- pixel checks -------------------------------------------------------------

const W: i32 = 480;
const H: i32 = 320;

/// Three monthly slots, one series, fixed 100..140 value axis.
fn one_series_chart(kind: SeriesKind, values: Vec<Option<f64>>) -> NormalizedChart {
    let series = vec![AlignedSeries { name: "X".into(), kind, values }];
    let (supplier, market) = match kind {
        SeriesKind::Bar => (series, Vec::new()),
        SeriesKind::Line => (Vec::new(), series),
    };
    NormalizedChart {
        categories: vec!["Jan 2024".into(), "Feb 2024".into(), "Mar 2024".into()],
        supplier,
        market,
        axis_range: AxisRange::new(100.0, 140.0),
    }
}

fn render_rgba(data: &NormalizedChart) -> image::RgbaImage {
    let opts = RenderOptions { width: W, height: H, draw_labels: false, ..RenderOptions::default() };
    let bytes = PriceTrendChart::new(data).render_to_png_bytes(&opts).expect("render bytes");
    image::load_from_memory(&bytes).expect("decode").to_rgba8()
}

fn is_color(img: &image::RgbaImage, x: f32, y: f32, c: skia_safe::Color) -> bool {
    let p = img.get_pixel(x as u32, y as u32);
    [(p[0], c.r()), (p[1], c.g()), (p[2], c.b())]
        .iter()
        .all(|&(got, want)| (got as i32 - want as i32).abs() <= 24)
}

/// Pixel position of `value` on the fixed axis, and slot geometry.
fn geometry(value: f64) -> (PlotRect, f32, f32) {
    let r = PlotRect::within(W, H, &Insets::default());
    let slot_w = r.width() as f32 / 3.0;
    let y = r.bottom as f32 - ((value - 100.0) / 40.0) as f32 * r.height() as f32;
    (r, slot_w, y)
}

#[test]
fn line_is_broken_at_absent_month() {
    let color = Theme::dark().line_color(0);
    let (r, slot_w, y) = geometry(120.0);
    // halfway between slot centres 0 and 1, and between 1 and 2
    let left_gap = r.left as f32 + slot_w;
    let right_gap = r.left as f32 + slot_w * 2.0;

    let solid = render_rgba(&one_series_chart(SeriesKind::Line, vec![Some(120.0); 3]));
    assert!(is_color(&solid, left_gap, y, color), "continuous line should cross slot boundary");
    assert!(is_color(&solid, right_gap, y, color));

    let gapped = render_rgba(&one_series_chart(SeriesKind::Line, vec![Some(120.0), None, Some(120.0)]));
    assert!(!is_color(&gapped, left_gap, y, color), "line must not bridge the missing month");
    assert!(!is_color(&gapped, right_gap, y, color));
}

#[test]
fn no_bar_for_absent_month() {
    let color = Theme::dark().bar_color(0);
    let (r, slot_w, _) = geometry(130.0);
    // inside the bar body, off the vertical grid line through the slot centre
    let (_, _, y) = geometry(112.0);
    let in_slot = |i: usize| r.left as f32 + slot_w * (i as f32 + 0.5) + 10.0;

    let img = render_rgba(&one_series_chart(SeriesKind::Bar, vec![Some(130.0), None, Some(130.0)]));
    assert!(is_color(&img, in_slot(0), y, color), "bar expected in first slot");
    assert!(is_color(&img, in_slot(2), y, color), "bar expected in last slot");
    assert!(!is_color(&img, in_slot(1), y, color), "missing month must not draw a bar");
}
