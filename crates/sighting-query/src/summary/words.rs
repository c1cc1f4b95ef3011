//! Word frequency over report summaries.

use std::collections::HashMap;

use polars::prelude::*;
use sighting_model::SightingTable;

use crate::error::Result;

/// `(word, count)` for the `top` most frequent words in the lowercased,
/// whitespace-split summaries. Equal counts are ordered alphabetically.
pub fn word_frequency(table: &SightingTable, top: usize) -> Result<DataFrame> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for report in table {
        for word in report.summary.to_lowercase().split_whitespace() {
            *counts.entry(word.to_string()).or_default() += 1;
        }
    }

    let (words, values): (Vec<String>, Vec<u64>) = counts.into_iter().unzip();
    let limit = IdxSize::try_from(top).unwrap_or(IdxSize::MAX);
    let df = DataFrame::new(vec![
        Column::new("word".into(), words),
        Column::new("count".into(), values),
    ])?
    .lazy()
    .sort(
        ["count", "word"],
        SortMultipleOptions::default().with_order_descending_multi([true, false]),
    )
    .limit(limit)
    .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, table};

    #[test]
    fn top_words_with_alphabetical_ties() {
        let said = |summary: &str| {
            let mut r = report(2001, 1, 1, 60);
            r.summary = summary.to_string();
            r
        };
        let df = word_frequency(
            &table(vec![
                said("Bright light moving"),
                said("bright ORB"),
                said("light  light"),
            ]),
            3,
        )
        .unwrap();

        let words: Vec<_> = df.column("word").unwrap().str().unwrap().into_no_null_iter().collect();
        let counts: Vec<_> = df.column("count").unwrap().u64().unwrap().into_no_null_iter().collect();
        assert_eq!(words, vec!["light", "bright", "moving"]);
        assert_eq!(counts, vec![3, 2, 1]);
    }
}
