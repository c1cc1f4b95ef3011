//! Per-city counts for the map.

use polars::prelude::*;
use sighting_model::SightingTable;

use crate::error::Result;

/// `(city, city_latitude, city_longitude, count)` for the `top` most
/// reported locations, sorted by count descending then city name.
pub fn city_counts(table: &SightingTable, top: usize) -> Result<DataFrame> {
    let city: Vec<&str> = table.iter().map(|r| r.city.as_str()).collect();
    let latitude: Vec<f64> = table.iter().map(|r| r.city_latitude).collect();
    let longitude: Vec<f64> = table.iter().map(|r| r.city_longitude).collect();

    let limit = IdxSize::try_from(top).unwrap_or(IdxSize::MAX);
    let df = DataFrame::new(vec![
        Column::new("city".into(), city),
        Column::new("city_latitude".into(), latitude),
        Column::new("city_longitude".into(), longitude),
    ])?
    .lazy()
    .group_by([col("city"), col("city_latitude"), col("city_longitude")])
    .agg([len().cast(DataType::UInt64).alias("count")])
    .sort(
        ["count", "city"],
        SortMultipleOptions::default()
            .with_order_descending_multi([true, false])
            .with_maintain_order(true),
    )
    .limit(limit)
    .collect()?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, table};

    fn located(city: &str, lat: f64) -> sighting_model::CleanedReport {
        let mut r = report(2001, 1, 1, 60);
        r.city = city.to_string();
        r.city_latitude = lat;
        r
    }

    #[test]
    fn most_reported_cities_first() {
        let reports = table(vec![
            located("Seattle", 47.6),
            located("Austin", 30.3),
            located("Seattle", 47.6),
            located("Boise", 43.6),
            located("Austin", 30.3),
            located("Seattle", 47.6),
        ]);
        let df = city_counts(&reports, 2).unwrap();

        let cities: Vec<_> = df.column("city").unwrap().str().unwrap().into_no_null_iter().collect();
        let counts: Vec<_> = df.column("count").unwrap().u64().unwrap().into_no_null_iter().collect();
        assert_eq!(cities, vec!["Seattle", "Austin"]);
        assert_eq!(counts, vec![3, 2]);
    }
}
