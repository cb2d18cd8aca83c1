// File: crates/trend-core/src/month.rs
// Summary: Month label parsing and chronological ordering of category labels.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized month label {label:?}")]
pub struct MonthLabelError {
    pub label: String,
}

/// Calendar interpretation of a month label. Day defaults to the 1st.
pub struct MonthKey;

impl MonthKey {
    /// Accepts "Jan 2024", "January 2024", "Sept 2024", "15 Jan 2024", "2024-01" and
    /// "2024-01-15". Month names are case-insensitive; extra whitespace is ignored.
    /// The year must be exactly four digits.
    pub fn parse(label: &str) -> Result<NaiveDate, MonthLabelError> {
        let cleaned = label
            .split_whitespace()
            .map(|tok| if tok.eq_ignore_ascii_case("sept") { "Sep" } else { tok })
            .collect::<Vec<_>>()
            .join(" ");
        // chrono's %Y takes a sign and any digit count; only plain four-digit years are months here
        if !has_plain_year(&cleaned) {
            return Err(MonthLabelError { label: label.to_string() });
        }
        NaiveDate::parse_from_str(&cleaned, "%d %B %Y")
            .or_else(|_| NaiveDate::parse_from_str(&format!("1 {cleaned}"), "%d %B %Y"))
            .or_else(|_| NaiveDate::parse_from_str(&cleaned, "%Y-%m-%d"))
            .or_else(|_| NaiveDate::parse_from_str(&format!("{cleaned}-01"), "%Y-%m-%d"))
            .map_err(|_| MonthLabelError { label: label.to_string() })
    }
}

/// Year token: last word of a month-name label, or the leading field of an ISO label.
fn has_plain_year(cleaned: &str) -> bool {
    let year = if cleaned.contains(' ') { cleaned.rsplit(' ').next() } else { cleaned.split('-').next() };
    year.is_some_and(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
}

/// Sort labels ascending by calendar date.
///
/// Labels that parse to the same date keep their relative order. Labels that fail to
/// parse are placed after every parsed label, in the order they were given.
pub fn sort_categories(labels: Vec<String>) -> Vec<String> {
    let mut keyed: Vec<(Option<NaiveDate>, String)> = labels
        .into_iter()
        .map(|label| match MonthKey::parse(&label) {
            Ok(date) => (Some(date), label),
            Err(err) => {
                debug!(%err, "month label sorts last");
                (None, label)
            }
        })
        .collect();
    // stable: ties and unparsed labels stay in encounter order
    keyed.sort_by_key(|(date, _)| (date.is_none(), *date));
    keyed.into_iter().map(|(_, label)| label).collect()
}
