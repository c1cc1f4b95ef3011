//! Summaries over a filtered table.

use std::num::NonZeroU64;

use chrono::NaiveDate;
use sighting_model::{
    CleanedReport, DecadeSelector, DurationBucket, FilterSpec, ShapeCategory, SightingTable,
};
use sighting_query::{SummaryKind, SummaryOptions, apply_filters, summarize, table_frame};

fn report(date: (i32, u32, u32), hour: u32, seconds: u64, shape: ShapeCategory) -> CleanedReport {
    CleanedReport {
        date_time: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap(),
        duration_seconds: NonZeroU64::new(seconds).unwrap(),
        shape,
        summary: format!("{shape} seen"),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        city_latitude: 45.52,
        city_longitude: -122.68,
        text: Some("Long narrative".to_string()),
        polarity: Some(0.2),
    }
}

fn table() -> SightingTable {
    vec![
        report((1995, 7, 4), 21, 300, ShapeCategory::Light),
        report((1998, 7, 5), 22, 30, ShapeCategory::Light),
        report((2003, 1, 1), 0, 600, ShapeCategory::Triangle),
        report((2012, 8, 11), 23, 5, ShapeCategory::Fireball),
    ]
    .into_iter()
    .collect()
}

#[test]
fn every_summary_builds_on_an_empty_view() {
    let empty = SightingTable::default();
    for kind in SummaryKind::ALL {
        assert!(summarize(&empty, kind, &SummaryOptions::default()).is_ok(), "{kind}");
    }
}

#[test]
fn summaries_follow_the_filtered_view() {
    let spec = FilterSpec::new(
        [ShapeCategory::Light],
        DurationBucket::Long,
        DecadeSelector::Decade(1990),
    );
    let view = apply_filters(&table(), &spec);
    assert_eq!(view.len(), 1);

    let monthly = summarize(&view, SummaryKind::Monthly, &SummaryOptions::default()).unwrap();
    assert_eq!(monthly.height(), 1);

    let words = summarize(&view, SummaryKind::Words, &SummaryOptions::default()).unwrap();
    let words: Vec<_> = words
        .column("word")
        .unwrap()
        .str()
        .unwrap()
        .into_no_null_iter()
        .collect();
    assert_eq!(words, vec!["light", "seen"]);
}

#[test]
fn table_frame_exposes_typed_columns() {
    let df = table_frame(&table()).unwrap();
    assert_eq!(df.height(), 4);

    let names: Vec<_> = df.get_column_names().iter().map(|n| n.to_string()).collect();
    insta::assert_snapshot!(names.join(","), @"date_time,year,month,hour,duration_seconds,shape_category,summary,city,state,city_latitude,city_longitude,text,polarity");

    let first = df.column("date_time").unwrap().str().unwrap().get(0);
    assert_eq!(first, Some("1995-07-04T21:15:00"));
    let seconds = df.column("duration_seconds").unwrap().u64().unwrap().get(2);
    assert_eq!(seconds, Some(600));
    let shape = df.column("shape_category").unwrap().str().unwrap().get(3);
    assert_eq!(shape, Some("fireball"));
}
