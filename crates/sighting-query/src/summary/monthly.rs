//! Sightings per calendar month.

use std::collections::BTreeMap;

use polars::prelude::*;
use sighting_model::SightingTable;

use crate::error::Result;

/// Long-format counts: `(year, month, count)` sorted by year then month.
/// Months without sightings are absent.
pub fn monthly_counts(table: &SightingTable) -> Result<DataFrame> {
    let year: Vec<i32> = table.iter().map(|r| r.year()).collect();
    let month: Vec<u32> = table.iter().map(|r| r.month()).collect();

    let df = DataFrame::new(vec![
        Column::new("year".into(), year),
        Column::new("month".into(), month),
    ])?
    .lazy()
    .group_by([col("year"), col("month")])
    .agg([len().cast(DataType::UInt64).alias("count")])
    .sort(["year", "month"], SortMultipleOptions::default())
    .collect()?;
    Ok(df)
}

/// Year-by-month matrix: one row per observed year, columns `year, 1..12`,
/// months without sightings filled with 0.
pub fn monthly_heatmap(table: &SightingTable) -> Result<DataFrame> {
    let mut grid: BTreeMap<i32, [u64; 12]> = BTreeMap::new();
    for report in table {
        let row = grid.entry(report.year()).or_default();
        if let Some(cell) = (report.month() as usize)
            .checked_sub(1)
            .and_then(|idx| row.get_mut(idx))
        {
            *cell += 1;
        }
    }

    let years: Vec<i32> = grid.keys().copied().collect();
    let mut columns = vec![Column::new("year".into(), years)];
    for month in 0..12 {
        let counts: Vec<u64> = grid.values().map(|row| row[month]).collect();
        columns.push(Column::new((month + 1).to_string().into(), counts));
    }
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{report, table};

    fn sample() -> SightingTable {
        table(vec![
            report(2001, 3, 21, 60),
            report(1999, 12, 22, 60),
            report(2001, 3, 23, 60),
            report(2001, 1, 20, 60),
        ])
    }

    #[test]
    fn counts_are_sorted_by_year_and_month() {
        let df = monthly_counts(&sample()).unwrap();
        assert_eq!(df.height(), 3);

        let years: Vec<_> = df.column("year").unwrap().i32().unwrap().into_no_null_iter().collect();
        let months: Vec<_> = df.column("month").unwrap().u32().unwrap().into_no_null_iter().collect();
        let counts: Vec<_> = df.column("count").unwrap().u64().unwrap().into_no_null_iter().collect();
        assert_eq!(years, vec![1999, 2001, 2001]);
        assert_eq!(months, vec![12, 1, 3]);
        assert_eq!(counts, vec![1, 1, 2]);
    }

    #[test]
    fn heatmap_fills_missing_months() {
        let df = monthly_heatmap(&sample()).unwrap();
        assert_eq!(df.shape(), (2, 13));

        let march: Vec<_> = df.column("3").unwrap().u64().unwrap().into_no_null_iter().collect();
        let june: Vec<_> = df.column("6").unwrap().u64().unwrap().into_no_null_iter().collect();
        assert_eq!(march, vec![0, 2]);
        assert_eq!(june, vec![0, 0]);
    }

    #[test]
    fn empty_table_gives_empty_frames() {
        assert_eq!(monthly_counts(&SightingTable::default()).unwrap().height(), 0);
        assert_eq!(monthly_heatmap(&SightingTable::default()).unwrap().height(), 0);
    }
}
