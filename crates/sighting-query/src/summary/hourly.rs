//! Sightings by hour of day, laid out for a polar chart.

use std::collections::BTreeMap;

use polars::prelude::*;
use sighting_model::SightingTable;

use crate::error::Result;

/// 24 hours around a 360 degree dial.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// `(hour, frequency, angle, log_frequency, sqrt_frequency)` for every hour
/// with at least one sighting, sorted by hour. `log_frequency` is the natural
/// logarithm.
pub fn hourly_density(table: &SightingTable) -> Result<DataFrame> {
    let mut counts: BTreeMap<u32, u64> = BTreeMap::new();
    for report in table {
        *counts.entry(report.hour()).or_default() += 1;
    }

    let hour: Vec<u32> = counts.keys().copied().collect();
    let frequency: Vec<u64> = counts.values().copied().collect();
    let angle: Vec<f64> = hour.iter().map(|h| f64::from(*h) * DEGREES_PER_HOUR).collect();
    let log_frequency: Vec<f64> = frequency.iter().map(|f| (*f as f64).ln()).collect();
    let sqrt_frequency: Vec<f64> = frequency.iter().map(|f| (*f as f64).sqrt()).collect();

    Ok(DataFrame::new(vec![
        Column::new("hour".into(), hour),
        Column::new("frequency".into(), frequency),
        Column::new("angle".into(), angle),
        Column::new("log_frequency".into(), log_frequency),
        Column::new("sqrt_frequency".into(), sqrt_frequency),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, table};

    #[test]
    fn hours_map_to_angles() {
        let df = hourly_density(&table(vec![
            report(2001, 1, 22, 60),
            report(2002, 1, 22, 60),
            report(2003, 1, 22, 60),
            report(2003, 1, 22, 60),
            report(2003, 1, 6, 60),
        ]))
        .unwrap();

        let hours: Vec<_> = df.column("hour").unwrap().u32().unwrap().into_no_null_iter().collect();
        let angles: Vec<_> = df.column("angle").unwrap().f64().unwrap().into_no_null_iter().collect();
        let sqrt: Vec<_> = df
            .column("sqrt_frequency")
            .unwrap()
            .f64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(hours, vec![6, 22]);
        assert_eq!(angles, vec![90.0, 330.0]);
        assert_eq!(sqrt, vec![1.0, 2.0]);

        let log = df.column("log_frequency").unwrap().f64().unwrap();
        assert_eq!(log.get(0), Some(0.0));
        assert!((log.get(1).unwrap() - 4f64.ln()).abs() < 1e-12);
    }
}
