//! Cleaned reports and the immutable table snapshot.

use std::num::NonZeroU64;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::shape::ShapeCategory;

/// One sighting that survived preprocessing.
///
/// Every report has a parsed timestamp and a positive duration; rows that
/// fail either are never turned into a `CleanedReport`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedReport {
    pub date_time: NaiveDateTime,
    pub duration_seconds: NonZeroU64,
    pub shape: ShapeCategory,
    pub summary: String,
    pub city: String,
    pub state: String,
    pub city_latitude: f64,
    pub city_longitude: f64,
    /// Full narrative, when the source provides it.
    #[serde(default)]
    pub text: Option<String>,
    /// Pre-computed sentiment polarity of the summary.
    #[serde(default)]
    pub polarity: Option<f64>,
}

impl CleanedReport {
    pub fn year(&self) -> i32 {
        self.date_time.year()
    }

    /// Month of year, 1-12.
    pub fn month(&self) -> u32 {
        self.date_time.month()
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.date_time.hour()
    }
}

/// The cleaned report population.
///
/// Built once by preprocessing (or loaded from the snapshot cache) and never
/// mutated afterwards; filters produce new tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SightingTable {
    reports: Vec<CleanedReport>,
}

impl SightingTable {
    pub fn new(reports: Vec<CleanedReport>) -> Self {
        Self { reports }
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn reports(&self) -> &[CleanedReport] {
        &self.reports
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanedReport> {
        self.reports.iter()
    }

    /// Copy the reports matching `predicate` into a new table.
    pub fn filtered<F>(&self, predicate: F) -> SightingTable
    where
        F: Fn(&CleanedReport) -> bool,
    {
        SightingTable {
            reports: self
                .reports
                .iter()
                .filter(|report| predicate(report))
                .cloned()
                .collect(),
        }
    }

    pub fn into_reports(self) -> Vec<CleanedReport> {
        self.reports
    }
}

impl FromIterator<CleanedReport> for SightingTable {
    fn from_iter<I: IntoIterator<Item = CleanedReport>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SightingTable {
    type Item = &'a CleanedReport;
    type IntoIter = std::slice::Iter<'a, CleanedReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
