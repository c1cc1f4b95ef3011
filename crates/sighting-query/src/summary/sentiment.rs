//! Sentiment label counts.

use std::collections::BTreeMap;

use polars::prelude::*;
use sighting_model::{SentimentLabel, SightingTable};

use crate::error::Result;

/// `(sentiment, count)` over reports that carry a polarity score, one row
/// per label in negative, neutral, positive order.
pub fn sentiment_counts(table: &SightingTable, threshold: f64) -> Result<DataFrame> {
    let mut counts: BTreeMap<SentimentLabel, u64> = BTreeMap::new();
    for polarity in table.iter().filter_map(|r| r.polarity) {
        *counts
            .entry(SentimentLabel::classify(polarity, threshold))
            .or_default() += 1;
    }

    let labels = [
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
        SentimentLabel::Positive,
    ];
    let names: Vec<&str> = labels.iter().map(SentimentLabel::as_str).collect();
    let values: Vec<u64> = labels
        .iter()
        .map(|label| counts.get(label).copied().unwrap_or(0))
        .collect();

    Ok(DataFrame::new(vec![
        Column::new("sentiment".into(), names),
        Column::new("count".into(), values),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, table};

    #[test]
    fn classifies_only_scored_reports() {
        let scored = |polarity: Option<f64>| {
            let mut r = report(2001, 1, 1, 60);
            r.polarity = polarity;
            r
        };
        let df = sentiment_counts(
            &table(vec![
                scored(Some(0.6)),
                scored(Some(0.05)),
                scored(Some(-0.2)),
                scored(Some(0.01)),
                scored(None),
            ]),
            0.05,
        )
        .unwrap();

        let counts: Vec<_> = df.column("count").unwrap().u64().unwrap().into_no_null_iter().collect();
        assert_eq!(counts, vec![1, 1, 2]);
    }
}
