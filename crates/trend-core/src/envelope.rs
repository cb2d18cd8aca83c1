// File: crates/trend-core/src/envelope.rs
// Summary: Loaders for series collections: JSON response envelopes and long-format CSV.
// Notes:
// - A JSON envelope without `data` is an empty collection, matching an upstream empty state.
// - CSV layout is `name,month,price`; an empty price cell is an absent value.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::series::NamedSeries;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed series envelope: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed series csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: price {value:?} is not a number")]
    InvalidPrice { row: usize, value: String },
}

/// Response envelope `{ "data": [NamedSeries, ...] }` delivered by the data layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesEnvelope {
    #[serde(default)]
    pub data: Vec<NamedSeries>,
}

impl SeriesEnvelope {
    pub fn from_json_str(s: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = std::fs::File::open(path.as_ref())?;
        let env = Self::from_reader(std::io::BufReader::new(file))?;
        debug!(path = %path.as_ref().display(), series = env.data.len(), "loaded series envelope");
        Ok(env)
    }

    pub fn into_series(self) -> Vec<NamedSeries> { self.data }
}

#[derive(Debug, Deserialize)]
struct PriceRow {
    name: String,
    month: String,
    #[serde(default)]
    price: String,
}

/// Read long-format CSV rows into series, grouped by name in first-appearance order.
pub fn series_from_csv_reader<R: Read>(reader: R) -> Result<Vec<NamedSeries>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut out: Vec<NamedSeries> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (i, rec) in rdr.deserialize::<PriceRow>().enumerate() {
        let row = rec?;
        let value = if row.price.is_empty() {
            None
        } else {
            let v = row
                .price
                .parse::<f64>()
                .map_err(|_| LoadError::InvalidPrice { row: i + 1, value: row.price.clone() })?;
            Some(v)
        };
        let slot = *index.entry(row.name.clone()).or_insert_with(|| {
            out.push(NamedSeries::new(row.name.clone()));
            out.len() - 1
        });
        out[slot].prices.insert(row.month, value);
    }
    Ok(out)
}

pub fn series_from_csv_path(path: impl AsRef<Path>) -> Result<Vec<NamedSeries>, LoadError> {
    let file = std::fs::File::open(path.as_ref())?;
    let series = series_from_csv_reader(std::io::BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), series = series.len(), "loaded series csv");
    Ok(series)
}
