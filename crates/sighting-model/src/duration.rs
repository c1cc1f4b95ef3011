//! Duration units and the short/long duration buckets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::ModelError;

/// Durations strictly below this many seconds are "short".
pub const SHORT_DURATION_LIMIT_SECONDS: u64 = 60;

/// Canonical time unit recognized in free-text durations.
///
/// Months are fixed at 30 days and years at 365 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl DurationUnit {
    /// Number of seconds in one unit.
    pub const fn seconds(&self) -> u64 {
        match self {
            DurationUnit::Second => 1,
            DurationUnit::Minute => 60,
            DurationUnit::Hour => 60 * 60,
            DurationUnit::Day => 24 * 60 * 60,
            DurationUnit::Week => 7 * 24 * 60 * 60,
            DurationUnit::Month => 30 * 24 * 60 * 60,
            DurationUnit::Year => 365 * 24 * 60 * 60,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Second => "second",
            DurationUnit::Minute => "minute",
            DurationUnit::Hour => "hour",
            DurationUnit::Day => "day",
            DurationUnit::Week => "week",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Duration filter choice.
///
/// `Short` and `Long` partition the positive durations at
/// [`SHORT_DURATION_LIMIT_SECONDS`]: the limit itself is long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBucket {
    Short,
    Long,
    #[default]
    All,
}

impl DurationBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationBucket::Short => "short",
            DurationBucket::Long => "long",
            DurationBucket::All => "all",
        }
    }

    /// Returns true if a report lasting `seconds` belongs to this bucket.
    pub fn contains(&self, seconds: NonZeroU64) -> bool {
        match self {
            DurationBucket::Short => seconds.get() < SHORT_DURATION_LIMIT_SECONDS,
            DurationBucket::Long => seconds.get() >= SHORT_DURATION_LIMIT_SECONDS,
            DurationBucket::All => true,
        }
    }

    /// Parse a label, falling back to [`DurationBucket::All`] for anything
    /// outside the enumeration.
    pub fn from_label_lenient(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DurationBucket {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(DurationBucket::Short),
            "long" => Ok(DurationBucket::Long),
            "all" => Ok(DurationBucket::All),
            _ => Err(ModelError::UnknownDurationBucket(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> NonZeroU64 {
        NonZeroU64::new(value).unwrap()
    }

    #[test]
    fn unit_seconds() {
        assert_eq!(DurationUnit::Minute.seconds(), 60);
        assert_eq!(DurationUnit::Week.seconds(), 604_800);
        assert_eq!(DurationUnit::Month.seconds(), 2_592_000);
        assert_eq!(DurationUnit::Year.seconds(), 31_536_000);
    }

    #[test]
    fn boundary_is_long() {
        assert!(DurationBucket::Long.contains(secs(60)));
        assert!(!DurationBucket::Short.contains(secs(60)));
        assert!(DurationBucket::Short.contains(secs(59)));
        assert!(DurationBucket::All.contains(secs(60)));
    }

    #[test]
    fn lenient_label_defaults_to_all() {
        assert_eq!(DurationBucket::from_label_lenient("LONG"), DurationBucket::Long);
        assert_eq!(DurationBucket::from_label_lenient("medium"), DurationBucket::All);
    }
}
