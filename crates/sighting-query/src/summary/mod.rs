//! Chart-preparation summaries.
//!
//! Each function takes an already filtered table and returns the small
//! DataFrame one dashboard chart is drawn from.

mod cities;
mod histogram;
mod hourly;
mod monthly;
mod sentiment;
mod words;

use std::fmt;
use std::str::FromStr;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use sighting_model::{DEFAULT_SENTIMENT_THRESHOLD, SightingTable};

use crate::error::{QueryError, Result};

pub use cities::city_counts;
pub use histogram::duration_histogram;
pub use hourly::{DEGREES_PER_HOUR, hourly_density};
pub use monthly::{monthly_counts, monthly_heatmap};
pub use sentiment::sentiment_counts;
pub use words::word_frequency;

/// Tunables for the summaries, read from the `[summary]` settings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Durations at or above this many seconds are left out of the histogram.
    pub histogram_cap_seconds: u64,
    pub histogram_bins: usize,
    /// Number of cities kept for the map.
    pub map_top_cities: usize,
    pub top_words: usize,
    pub sentiment_threshold: f64,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            histogram_cap_seconds: 2000,
            histogram_bins: 50,
            map_top_cities: 3000,
            top_words: 10,
            sentiment_threshold: DEFAULT_SENTIMENT_THRESHOLD,
        }
    }
}

/// Which summary to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    Monthly,
    Heatmap,
    Hourly,
    Histogram,
    Cities,
    Sentiment,
    Words,
}

impl SummaryKind {
    pub const ALL: [SummaryKind; 7] = [
        SummaryKind::Monthly,
        SummaryKind::Heatmap,
        SummaryKind::Hourly,
        SummaryKind::Histogram,
        SummaryKind::Cities,
        SummaryKind::Sentiment,
        SummaryKind::Words,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryKind::Monthly => "monthly",
            SummaryKind::Heatmap => "heatmap",
            SummaryKind::Hourly => "hourly",
            SummaryKind::Histogram => "histogram",
            SummaryKind::Cities => "cities",
            SummaryKind::Sentiment => "sentiment",
            SummaryKind::Words => "words",
        }
    }

    /// Short description for help output.
    pub fn description(&self) -> &'static str {
        match self {
            SummaryKind::Monthly => "sightings per year and month",
            SummaryKind::Heatmap => "year by month count matrix",
            SummaryKind::Hourly => "sightings per hour of day, polar layout",
            SummaryKind::Histogram => "duration distribution",
            SummaryKind::Cities => "most reported cities with coordinates",
            SummaryKind::Sentiment => "summary polarity labels",
            SummaryKind::Words => "most frequent summary words",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SummaryKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        SummaryKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| QueryError::UnknownSummary(s.to_string()))
    }
}

/// Produce the requested summary.
pub fn summarize(
    table: &SightingTable,
    kind: SummaryKind,
    options: &SummaryOptions,
) -> Result<DataFrame> {
    let _span = tracing::debug_span!("summary", kind = %kind).entered();
    match kind {
        SummaryKind::Monthly => monthly_counts(table),
        SummaryKind::Heatmap => monthly_heatmap(table),
        SummaryKind::Hourly => hourly_density(table),
        SummaryKind::Histogram => duration_histogram(
            table,
            options.histogram_cap_seconds,
            options.histogram_bins,
        ),
        SummaryKind::Cities => city_counts(table, options.map_top_cities),
        SummaryKind::Sentiment => sentiment_counts(table, options.sentiment_threshold),
        SummaryKind::Words => word_frequency(table, options.top_words),
    }
}
