// File: crates/trend-examples/src/bin/price_trend.rs
// Summary: Minimal example that normalizes built-in supplier/market prices and renders a PNG.

use trend_core::{normalize, NamedSeries, PriceTrendChart, RenderOptions};

fn main() {
    let supplier = vec![
        NamedSeries::from_pairs("Supplier A", [("Jan 2024", 100.0), ("Mar 2024", 140.0), ("May 2024", 136.0)]),
        NamedSeries::from_pairs("Supplier B", [("Feb 2024", 112.0), ("Mar 2024", 128.0), ("Apr 2024", 131.0)]),
    ];
    let market = vec![NamedSeries::from_pairs(
        "Market index",
        [("Jan 2024", 104.0), ("Feb 2024", 118.0), ("Apr 2024", 127.0), ("May 2024", 133.0)],
    )];

    let data = normalize(&supplier, &market);
    println!("categories: {}", data.categories.join(", "));
    println!("axis: {}..{}", data.axis_range.min, data.axis_range.max);

    let opts = RenderOptions { title: Some("Price benchmarking 2024".into()), ..RenderOptions::default() };
    let out = std::path::PathBuf::from("target/out/example_price_trend.png");
    PriceTrendChart::new(&data).render_to_png(&opts, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
