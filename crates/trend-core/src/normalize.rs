// File: crates/trend-core/src/normalize.rs
// Summary: Series normalization; unified month axis, dense aligned series, shared value range.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::axis::{AxisPolicy, AxisRange};
use crate::month::sort_categories;
use crate::series::{AlignedSeries, NamedSeries, SeriesKind};

/// Output of one normalization pass, ready for a bar+line chart surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedChart {
    pub categories: Vec<String>,
    pub supplier: Vec<AlignedSeries>,
    pub market: Vec<AlignedSeries>,
    pub axis_range: AxisRange,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: String,
    pub kind: SeriesKind,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TooltipRow {
    pub name: String,
    pub kind: SeriesKind,
    pub value: Option<f64>,
}

/// Shared tooltip for one category: every series' value at that month.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tooltip {
    pub category: String,
    pub rows: Vec<TooltipRow>,
}

impl NormalizedChart {
    /// Supplier series first, then market series.
    pub fn all_series(&self) -> impl Iterator<Item = &AlignedSeries> {
        self.supplier.iter().chain(self.market.iter())
    }

    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.all_series()
            .map(|s| LegendEntry { name: s.name.clone(), kind: s.kind })
            .collect()
    }

    pub fn tooltip_at(&self, index: usize) -> Option<Tooltip> {
        let category = self.categories.get(index)?.clone();
        let rows = self
            .all_series()
            .map(|s| TooltipRow { name: s.name.clone(), kind: s.kind, value: s.value_at(index) })
            .collect();
        Some(Tooltip { category, rows })
    }
}

/// Stateless normalizer parameterized by its axis policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Normalizer {
    pub policy: AxisPolicy,
}

impl Normalizer {
    pub fn new(policy: AxisPolicy) -> Self {
        Self { policy }
    }

    pub fn normalize(&self, supplier: &[NamedSeries], market: &[NamedSeries]) -> NormalizedChart {
        let categories = collect_categories(supplier, market);
        let supplier = align_all(supplier, &categories, SeriesKind::Bar);
        let market = align_all(market, &categories, SeriesKind::Line);
        let axis_range = self
            .policy
            .range_for(supplier.iter().chain(market.iter()).flat_map(|s| s.present()));

        trace!(
            categories = categories.len(),
            supplier = supplier.len(),
            market = market.len(),
            min = axis_range.min,
            max = axis_range.max,
            "normalized price series"
        );
        NormalizedChart { categories, supplier, market, axis_range }
    }
}

/// Normalize with the default axis policy (step 10, empty fallback 0..1000).
pub fn normalize(supplier: &[NamedSeries], market: &[NamedSeries]) -> NormalizedChart {
    Normalizer::default().normalize(supplier, market)
}

fn collect_categories(supplier: &[NamedSeries], market: &[NamedSeries]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut labels = Vec::new();
    for month in supplier.iter().chain(market.iter()).flat_map(|s| s.months()) {
        if seen.insert(month) {
            labels.push(month.to_string());
        }
    }
    sort_categories(labels)
}

fn align_all(series: &[NamedSeries], categories: &[String], kind: SeriesKind) -> Vec<AlignedSeries> {
    series
        .iter()
        .map(|s| AlignedSeries {
            name: s.name.clone(),
            kind,
            values: categories.iter().map(|c| s.price(c)).collect(),
        })
        .collect()
}
