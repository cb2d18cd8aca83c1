// File: crates/trend-core/tests/properties.rs
// Purpose: Property checks for normalization over generated month-keyed series.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use proptest::prelude::*;
use trend_core::{normalize, AxisRange, MonthKey, NamedSeries};

const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

fn month_label() -> impl Strategy<Value = String> {
    (0usize..12, 2019i32..2027).prop_map(|(m, y)| format!("{} {}", MONTHS[m], y))
}

fn named_series() -> impl Strategy<Value = NamedSeries> {
    (
        "[A-Z][a-z]{0,6}",
        proptest::collection::btree_map(month_label(), proptest::option::weighted(0.8, 0.0f64..5000.0), 0..10),
    )
        .prop_map(|(name, prices): (String, BTreeMap<String, Option<f64>>)| NamedSeries { name, prices: prices.into_iter().collect() })
}

fn collections() -> impl Strategy<Value = (Vec<NamedSeries>, Vec<NamedSeries>)> {
    (
        proptest::collection::vec(named_series(), 0..4),
        proptest::collection::vec(named_series(), 0..4),
    )
}

proptest! {
    #[test]
    fn prop_categories_are_the_union(input in collections()) {
        let (supplier, market) = input;
        let out = normalize(&supplier, &market);
        let union: HashSet<&str> = supplier.iter().chain(market.iter()).flat_map(|s| s.months()).collect();
        prop_assert_eq!(out.categories.len(), union.len());
        let got: HashSet<&str> = out.categories.iter().map(String::as_str).collect();
        prop_assert_eq!(got, union);
    }

    #[test]
    fn prop_aligned_lengths_match_axis(input in collections()) {
        let (supplier, market) = input;
        let out = normalize(&supplier, &market);
        prop_assert_eq!(out.supplier.len(), supplier.len());
        prop_assert_eq!(out.market.len(), market.len());
        for s in out.all_series() {
            prop_assert_eq!(s.values.len(), out.categories.len());
        }
    }

    #[test]
    fn prop_missing_months_are_absent(input in collections()) {
        let (supplier, market) = input;
        let out = normalize(&supplier, &market);
        let pairs = supplier.iter().zip(&out.supplier).chain(market.iter().zip(&out.market));
        for (src, aligned) in pairs {
            for (i, month) in out.categories.iter().enumerate() {
                prop_assert_eq!(aligned.values[i], src.prices.get(month).copied().flatten());
            }
        }
    }

    #[test]
    fn prop_categories_sorted_by_calendar(input in collections()) {
        let (supplier, market) = input;
        let out = normalize(&supplier, &market);
        let dates: Vec<NaiveDate> = out.categories.iter().map(|c| MonthKey::parse(c).unwrap()).collect();
        prop_assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_range_covers_values_on_step(input in collections()) {
        let (supplier, market) = input;
        let out = normalize(&supplier, &market);
        let values: Vec<f64> = out.all_series().flat_map(|s| s.present()).collect();
        if values.is_empty() {
            prop_assert_eq!(out.axis_range, AxisRange::new(0.0, 1000.0));
        } else {
            for v in &values {
                prop_assert!(out.axis_range.contains(*v));
            }
            prop_assert_eq!(out.axis_range.min % 10.0, 0.0);
            prop_assert_eq!(out.axis_range.max % 10.0, 0.0);
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(input in collections()) {
        let (supplier, market) = input;
        prop_assert_eq!(normalize(&supplier, &market), normalize(&supplier, &market));
    }
}
