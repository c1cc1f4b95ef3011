//! The one-time preprocessing pass: raw rows to cleaned reports.
//!
//! Checks run in a fixed order and the first failure decides why a row is
//! dropped:
//!
//! 1. required fields present (coordinates must be numbers)
//! 2. country on the allow-list
//! 3. timestamp parses
//! 4. duration normalizes to a positive number of seconds
//!
//! Shape categorization is total and never drops a row. Drops are counted,
//! never raised.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sighting_model::{CleanedReport, SightingTable};
use sighting_normalize::{
    CountryAllowList, categorize_shape, normalize_duration, parse_timestamp,
};

use crate::raw::RawReport;

/// Preprocessing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreprocessOptions {
    pub allowed_countries: CountryAllowList,
}

impl PreprocessOptions {
    /// Hex SHA-256 over every setting that changes which rows survive.
    ///
    /// Recorded in the snapshot manifest; a different fingerprint forces a
    /// rebuild.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(b"allowed_countries");
        for spelling in self.allowed_countries.iter() {
            hasher.update([0u8]);
            hasher.update(spelling.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// Why a raw row did not become a [`CleanedReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    MissingField,
    CountryNotAllowed,
    MalformedTimestamp,
    UnparseableDuration,
}

impl DropReason {
    /// Every reason, in check order.
    pub const ALL: [DropReason; 4] = [
        DropReason::MissingField,
        DropReason::CountryNotAllowed,
        DropReason::MalformedTimestamp,
        DropReason::UnparseableDuration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::MissingField => "missing field",
            DropReason::CountryNotAllowed => "country not allowed",
            DropReason::MalformedTimestamp => "malformed timestamp",
            DropReason::UnparseableDuration => "unparseable duration",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Row counts for one preprocessing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessStats {
    pub input_rows: usize,
    pub kept_rows: usize,
    dropped: BTreeMap<DropReason, usize>,
}

impl PreprocessStats {
    pub fn record_drop(&mut self, reason: DropReason) {
        *self.dropped.entry(reason).or_default() += 1;
    }

    pub fn dropped(&self, reason: DropReason) -> usize {
        self.dropped.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_dropped(&self) -> usize {
        self.dropped.values().sum()
    }

    /// Drop counts for every reason, in check order, zeros included.
    pub fn drops(&self) -> impl Iterator<Item = (DropReason, usize)> + '_ {
        DropReason::ALL
            .into_iter()
            .map(|reason| (reason, self.dropped(reason)))
    }

    /// Share of input rows that survived, in `[0, 1]`.
    pub fn retention(&self) -> f64 {
        if self.input_rows == 0 {
            return 0.0;
        }
        self.kept_rows as f64 / self.input_rows as f64
    }
}

/// Clean a single raw row, or say why it must be dropped.
pub fn clean_report(
    raw: RawReport,
    options: &PreprocessOptions,
) -> Result<CleanedReport, DropReason> {
    let RawReport {
        summary,
        country,
        city,
        state,
        date_time,
        shape,
        duration,
        city_latitude,
        city_longitude,
        text,
        polarity,
    } = raw;

    let summary = present(summary)?;
    let country = present(country)?;
    let city = present(city)?;
    let state = present(state)?;
    let date_time = present(date_time)?;
    let shape = present(shape)?;
    let duration = present(duration)?;
    let city_latitude = coordinate(city_latitude)?;
    let city_longitude = coordinate(city_longitude)?;

    if !options.allowed_countries.allows(&country) {
        return Err(DropReason::CountryNotAllowed);
    }
    let date_time = parse_timestamp(&date_time).ok_or(DropReason::MalformedTimestamp)?;
    let duration_seconds =
        normalize_duration(&duration).ok_or(DropReason::UnparseableDuration)?;

    Ok(CleanedReport {
        date_time,
        duration_seconds,
        shape: categorize_shape(&shape),
        summary,
        city,
        state,
        city_latitude,
        city_longitude,
        text: text.filter(|value| !value.trim().is_empty()),
        polarity: polarity
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite()),
    })
}

/// Run the full pass over every raw row.
pub fn preprocess<I>(raws: I, options: &PreprocessOptions) -> (SightingTable, PreprocessStats)
where
    I: IntoIterator<Item = RawReport>,
{
    let _span = tracing::info_span!("preprocess").entered();

    let mut stats = PreprocessStats::default();
    let mut reports = Vec::new();
    for raw in raws {
        stats.input_rows += 1;
        match clean_report(raw, options) {
            Ok(report) => reports.push(report),
            Err(reason) => stats.record_drop(reason),
        }
    }
    stats.kept_rows = reports.len();

    for (reason, count) in stats.drops() {
        tracing::debug!(reason = %reason, count, "dropped rows");
    }
    tracing::info!(
        input = stats.input_rows,
        kept = stats.kept_rows,
        dropped = stats.total_dropped(),
        "preprocessing complete"
    );

    (SightingTable::new(reports), stats)
}

fn present(value: Option<String>) -> Result<String, DropReason> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(DropReason::MissingField)
}

fn coordinate(value: Option<String>) -> Result<f64, DropReason> {
    present(value)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(DropReason::MissingField)
}
