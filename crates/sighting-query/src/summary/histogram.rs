//! Duration histogram.

use polars::prelude::*;
use sighting_model::SightingTable;

use crate::error::{QueryError, Result};

/// Equal-width bins over `[0, cap_seconds)`.
///
/// Reports lasting `cap_seconds` or longer are left out so a handful of
/// multi-day reports do not flatten the chart. Columns: `bin_start, bin_end,
/// count`, one row per bin including empty ones.
pub fn duration_histogram(table: &SightingTable, cap_seconds: u64, bins: usize) -> Result<DataFrame> {
    if bins == 0 {
        return Err(QueryError::InvalidOption {
            name: "histogram_bins",
            reason: "must be at least 1".to_string(),
        });
    }
    if cap_seconds == 0 {
        return Err(QueryError::InvalidOption {
            name: "histogram_cap_seconds",
            reason: "must be at least 1".to_string(),
        });
    }

    let width = cap_seconds as f64 / bins as f64;
    let mut counts = vec![0u64; bins];
    for report in table {
        let seconds = report.duration_seconds.get();
        if seconds >= cap_seconds {
            continue;
        }
        let idx = ((seconds as f64 / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let bin_start: Vec<f64> = (0..bins).map(|i| i as f64 * width).collect();
    let bin_end: Vec<f64> = (1..=bins).map(|i| i as f64 * width).collect();

    Ok(DataFrame::new(vec![
        Column::new("bin_start".into(), bin_start),
        Column::new("bin_end".into(), bin_end),
        Column::new("count".into(), counts),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, table};

    #[test]
    fn bins_exclude_capped_durations() {
        let reports = table(vec![
            report(2001, 1, 1, 1),
            report(2001, 1, 1, 39),
            report(2001, 1, 1, 40),
            report(2001, 1, 1, 1999),
            report(2001, 1, 1, 2000),
            report(2001, 1, 1, 86_400),
        ]);
        let df = duration_histogram(&reports, 2000, 50).unwrap();
        assert_eq!(df.height(), 50);

        let counts = df.column("count").unwrap().u64().unwrap();
        assert_eq!(counts.get(0), Some(2));
        assert_eq!(counts.get(1), Some(1));
        assert_eq!(counts.get(49), Some(1));
        assert_eq!(counts.sum(), Some(4));

        let ends = df.column("bin_end").unwrap().f64().unwrap();
        assert_eq!(ends.get(0), Some(40.0));
        assert_eq!(ends.get(49), Some(2000.0));
    }

    #[test]
    fn zero_bins_is_rejected() {
        let result = duration_histogram(&SightingTable::default(), 2000, 0);
        assert!(matches!(
            result,
            Err(QueryError::InvalidOption { name: "histogram_bins", .. })
        ));
    }
}
