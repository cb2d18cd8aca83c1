// File: crates/trend-core/src/series.rs
// Summary: Series model for month-keyed price series (input) and axis-aligned series (output).
// Notes:
// - `None` is the absent marker everywhere: a missing month is never coerced to 0.0.
// - Non-finite prices are treated as absent; they cannot be placed on a value axis.
// - `prices` keeps insertion order so unparseable labels can fall back to arrival order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Rendering tag carried by every aligned series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Bar,  // supplier prices, discrete bars per category
    Line, // market prices, continuous polyline
}

/// A named, sparse, month-keyed price series as delivered by the data layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NamedSeries {
    pub name: String,
    /// Month label to price, in the order the labels arrived.
    #[serde(default)]
    pub prices: IndexMap<String, Option<f64>>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), prices: IndexMap::new() }
    }

    pub fn with_price(mut self, month: impl Into<String>, value: f64) -> Self {
        self.prices.insert(month.into(), Some(value));
        self
    }

    /// Record the month as a category without a value (explicit `null` upstream).
    pub fn with_missing(mut self, month: impl Into<String>) -> Self {
        self.prices.insert(month.into(), None);
        self
    }

    pub fn from_pairs<K, I>(name: impl Into<String>, pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        let prices = pairs.into_iter().map(|(k, v)| (k.into(), Some(v))).collect();
        Self { name: name.into(), prices }
    }

    /// Price for `month`, or `None` when missing, null, or non-finite.
    pub fn price(&self, month: &str) -> Option<f64> {
        self.prices.get(month).copied().flatten().filter(|v| v.is_finite())
    }

    /// Month labels in mapping order (includes months whose value is absent).
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }
}

/// A series laid out densely along the shared category axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlignedSeries {
    pub name: String,
    pub kind: SeriesKind,
    pub values: Vec<Option<f64>>,
}

impl AlignedSeries {
    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Present values only, in category order.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v)
    }
}
