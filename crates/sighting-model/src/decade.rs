//! Decade filter selection.
//!
//! The set of selectable decades and the optional "pre-threshold" bucket are
//! configuration, not code: [`DecadeConfig`] is deserialized from the
//! `[filters]` table of the settings file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Selectable decades plus the optional "before <year>" bucket.
///
/// When deserialized, a missing `decades` list falls back to the default
/// decades while a missing `pre_threshold` disables the bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeConfig {
    /// First year of each selectable decade.
    #[serde(default = "default_decades")]
    pub decades: Vec<i32>,
    /// Years strictly below this value form the pre-threshold bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_threshold: Option<i32>,
}

fn default_decades() -> Vec<i32> {
    vec![1980, 1990, 2000, 2010, 2020]
}

impl Default for DecadeConfig {
    fn default() -> Self {
        Self {
            decades: default_decades(),
            pre_threshold: Some(1980),
        }
    }
}

impl DecadeConfig {
    /// Labels in display order: the pre-threshold bucket, each decade, then "all".
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.decades.len() + 2);
        if let Some(threshold) = self.pre_threshold {
            labels.push(DecadeSelector::Before(threshold).to_string());
        }
        labels.extend(self.decades.iter().map(|start| start.to_string()));
        labels.push(DecadeSelector::All.to_string());
        labels
    }
}

/// Which years a report must fall into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecadeSelector {
    /// No restriction.
    #[default]
    All,
    /// Years in `[start, start + 9]`.
    Decade(i32),
    /// Years strictly before the threshold.
    Before(i32),
}

impl DecadeSelector {
    /// Returns true if `year` is selected.
    pub fn contains_year(&self, year: i32) -> bool {
        match *self {
            DecadeSelector::All => true,
            DecadeSelector::Decade(start) => (start..=start.saturating_add(9)).contains(&year),
            DecadeSelector::Before(threshold) => year < threshold,
        }
    }

    /// Parse a label against the configured decades.
    ///
    /// Accepts `all`, a configured decade start (`1990`), and when a threshold
    /// is configured `pre-1980` / `before-1980`.
    pub fn parse(label: &str, config: &DecadeConfig) -> Result<Self, ModelError> {
        match label.parse::<DecadeSelector>()? {
            DecadeSelector::All => Ok(DecadeSelector::All),
            DecadeSelector::Decade(start) if config.decades.contains(&start) => {
                Ok(DecadeSelector::Decade(start))
            }
            DecadeSelector::Decade(start) => Err(ModelError::DecadeNotConfigured(start)),
            DecadeSelector::Before(threshold) if config.pre_threshold == Some(threshold) => {
                Ok(DecadeSelector::Before(threshold))
            }
            DecadeSelector::Before(_) => {
                Err(ModelError::PreThresholdNotConfigured(label.to_string()))
            }
        }
    }

    /// Like [`DecadeSelector::parse`], but anything unrecognized selects all years.
    pub fn parse_lenient(label: &str, config: &DecadeConfig) -> Self {
        Self::parse(label, config).unwrap_or_default()
    }
}

impl fmt::Display for DecadeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecadeSelector::All => write!(f, "all"),
            DecadeSelector::Decade(start) => write!(f, "{start}"),
            DecadeSelector::Before(threshold) => write!(f, "pre-{threshold}"),
        }
    }
}

impl FromStr for DecadeSelector {
    type Err = ModelError;

    /// Parse a label without checking it against any configuration.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "all" {
            return Ok(DecadeSelector::All);
        }
        let before = normalized
            .strip_prefix("pre-")
            .or_else(|| normalized.strip_prefix("before-"))
            .or_else(|| normalized.strip_prefix("before "));
        if let Some(year) = before {
            return year
                .trim()
                .parse()
                .map(DecadeSelector::Before)
                .map_err(|_| ModelError::UnknownDecade(s.to_string()));
        }
        normalized
            .parse()
            .map(DecadeSelector::Decade)
            .map_err(|_| ModelError::UnknownDecade(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_range_is_inclusive() {
        let nineties = DecadeSelector::Decade(1990);
        assert!(nineties.contains_year(1990));
        assert!(nineties.contains_year(1999));
        assert!(!nineties.contains_year(2000));
        assert!(!DecadeSelector::Decade(2000).contains_year(1999));
    }

    #[test]
    fn before_threshold_is_strict() {
        let before = DecadeSelector::Before(1980);
        assert!(before.contains_year(1979));
        assert!(!before.contains_year(1980));
    }

    #[test]
    fn parses_configured_labels() {
        let config = DecadeConfig::default();
        assert_eq!(
            DecadeSelector::parse("1990", &config),
            Ok(DecadeSelector::Decade(1990))
        );
        assert_eq!(
            DecadeSelector::parse("Pre-1980", &config),
            Ok(DecadeSelector::Before(1980))
        );
        assert_eq!(
            DecadeSelector::parse("before 1980", &config),
            Ok(DecadeSelector::Before(1980))
        );
        assert_eq!(DecadeSelector::parse("ALL", &config), Ok(DecadeSelector::All));
    }

    #[test]
    fn rejects_unconfigured_labels() {
        let config = DecadeConfig {
            decades: vec![1990, 2000],
            pre_threshold: None,
        };
        assert_eq!(
            DecadeSelector::parse("1980", &config),
            Err(ModelError::DecadeNotConfigured(1980))
        );
        assert!(matches!(
            DecadeSelector::parse("pre-1980", &config),
            Err(ModelError::PreThresholdNotConfigured(_))
        ));
        assert_eq!(
            DecadeSelector::parse_lenient("sixties", &config),
            DecadeSelector::All
        );
    }

    #[test]
    fn labels_follow_display_order() {
        let labels = DecadeConfig::default().labels();
        assert_eq!(
            labels,
            vec!["pre-1980", "1980", "1990", "2000", "2010", "2020", "all"]
        );
    }
}
