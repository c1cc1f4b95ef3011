//! The cleaned table as a Polars DataFrame.

use polars::prelude::*;
use sighting_model::SightingTable;

use crate::error::Result;

/// Layout of the `date_time` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Build a DataFrame with one row per report.
///
/// Columns: `date_time, year, month, hour, duration_seconds, shape_category,
/// summary, city, state, city_latitude, city_longitude, text, polarity`.
pub fn table_frame(table: &SightingTable) -> Result<DataFrame> {
    let reports = table.reports();

    let date_time: Vec<String> = reports
        .iter()
        .map(|r| r.date_time.format(TIMESTAMP_FORMAT).to_string())
        .collect();
    let year: Vec<i32> = reports.iter().map(|r| r.year()).collect();
    let month: Vec<u32> = reports.iter().map(|r| r.month()).collect();
    let hour: Vec<u32> = reports.iter().map(|r| r.hour()).collect();
    let duration: Vec<u64> = reports.iter().map(|r| r.duration_seconds.get()).collect();
    let shape: Vec<&str> = reports.iter().map(|r| r.shape.as_str()).collect();
    let summary: Vec<&str> = reports.iter().map(|r| r.summary.as_str()).collect();
    let city: Vec<&str> = reports.iter().map(|r| r.city.as_str()).collect();
    let state: Vec<&str> = reports.iter().map(|r| r.state.as_str()).collect();
    let latitude: Vec<f64> = reports.iter().map(|r| r.city_latitude).collect();
    let longitude: Vec<f64> = reports.iter().map(|r| r.city_longitude).collect();
    let text: Vec<Option<&str>> = reports.iter().map(|r| r.text.as_deref()).collect();
    let polarity: Vec<Option<f64>> = reports.iter().map(|r| r.polarity).collect();

    let df = DataFrame::new(vec![
        Column::new("date_time".into(), date_time),
        Column::new("year".into(), year),
        Column::new("month".into(), month),
        Column::new("hour".into(), hour),
        Column::new("duration_seconds".into(), duration),
        Column::new("shape_category".into(), shape),
        Column::new("summary".into(), summary),
        Column::new("city".into(), city),
        Column::new("state".into(), state),
        Column::new("city_latitude".into(), latitude),
        Column::new("city_longitude".into(), longitude),
        Column::new("text".into(), text),
        Column::new("polarity".into(), polarity),
    ])?;
    Ok(df)
}
