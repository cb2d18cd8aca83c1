// File: crates/trend-demo/src/main.rs
// Summary: Demo loads supplier and market series (JSON envelope or CSV), normalizes them,
//          prints a summary, and writes the chart PNG plus an optional JSON dump.
// Usage:   trend-demo <supplier> <market> [--out PATH] [--json PATH] [--theme NAME] [--title TEXT]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trend_core::{
    normalize, series_from_csv_path, theme, NamedSeries, PriceTrendChart, RenderOptions, SeriesEnvelope,
};

struct Args {
    supplier: PathBuf,
    market: PathBuf,
    out: PathBuf,
    json: Option<PathBuf>,
    theme: String,
    title: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let supplier = load_series(&args.supplier)
        .with_context(|| format!("failed to load supplier series '{}'", args.supplier.display()))?;
    let market = load_series(&args.market)
        .with_context(|| format!("failed to load market series '{}'", args.market.display()))?;
    info!(supplier = supplier.len(), market = market.len(), "loaded series");

    let data = normalize(&supplier, &market);
    if data.is_empty() {
        warn!("no months found in either collection; rendering empty chart");
    }
    println!("Months ({}): {}", data.categories.len(), data.categories.join(", "));
    println!("Value axis: [{}, {}]", data.axis_range.min, data.axis_range.max);
    for entry in data.legend() {
        println!("  {:?}: {}", entry.kind, entry.name);
    }

    if let Some(json_path) = &args.json {
        let file = std::fs::File::create(json_path)
            .with_context(|| format!("create '{}'", json_path.display()))?;
        serde_json::to_writer_pretty(file, &data).context("write normalized JSON")?;
        println!("Wrote {}", json_path.display());
    }

    let opts = RenderOptions {
        theme: theme::find(&args.theme),
        title: args.title.clone(),
        ..RenderOptions::default()
    };
    PriceTrendChart::new(&data).render_to_png(&opts, &args.out)?;
    println!("Wrote {}", args.out.display());
    Ok(())
}

/// `.csv` files use the long-format loader; anything else is a JSON envelope.
fn load_series(path: &Path) -> Result<Vec<NamedSeries>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let series = if is_csv {
        series_from_csv_path(path)?
    } else {
        SeriesEnvelope::from_path(path)?.into_series()
    };
    Ok(series)
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut out = PathBuf::from("target/out/price_trend.png");
    let mut json = None;
    let mut theme = String::from("dark");
    let mut title = None;

    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "--out" => out = PathBuf::from(value("--out")?),
            "--json" => json = Some(PathBuf::from(value("--json")?)),
            "--theme" => theme = value("--theme")?,
            "--title" => title = Some(value("--title")?),
            flag if flag.starts_with("--") => anyhow::bail!("unknown flag {flag}"),
            _ => positional.push(PathBuf::from(&arg)),
        }
    }

    let [supplier, market]: [PathBuf; 2] = positional.try_into().map_err(|_| {
        anyhow::anyhow!("usage: trend-demo <supplier> <market> [--out PATH] [--json PATH] [--theme NAME] [--title TEXT]")
    })?;
    Ok(Args { supplier, market, out, json, theme, title })
}
