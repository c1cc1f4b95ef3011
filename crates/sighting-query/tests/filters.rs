//! Algebraic properties of the record filters.

use std::collections::BTreeSet;
use std::num::NonZeroU64;

use chrono::NaiveDate;
use proptest::prelude::*;
use sighting_model::{
    CleanedReport, DecadeSelector, DurationBucket, FilterSpec, ShapeCategory, SightingTable,
};
use sighting_query::{apply_filters, filter_by_decade, filter_by_duration, filter_by_shape};

fn report(year: i32, seconds: u64, shape: ShapeCategory) -> CleanedReport {
    CleanedReport {
        date_time: NaiveDate::from_ymd_opt(year, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap(),
        duration_seconds: NonZeroU64::new(seconds).unwrap(),
        shape,
        summary: "Object".to_string(),
        city: "Tulsa".to_string(),
        state: "OK".to_string(),
        city_latitude: 36.15,
        city_longitude: -95.99,
        text: None,
        polarity: None,
    }
}

fn any_shape() -> impl Strategy<Value = ShapeCategory> {
    prop::sample::select(ShapeCategory::ALL.to_vec())
}

fn any_table() -> impl Strategy<Value = SightingTable> {
    prop::collection::vec((1940i32..2030, 1u64..7200, any_shape()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(year, seconds, shape)| report(year, seconds, shape))
            .collect()
    })
}

fn any_bucket() -> impl Strategy<Value = DurationBucket> {
    prop_oneof![
        Just(DurationBucket::Short),
        Just(DurationBucket::Long),
        Just(DurationBucket::All),
    ]
}

fn any_decade() -> impl Strategy<Value = DecadeSelector> {
    prop_oneof![
        Just(DecadeSelector::All),
        Just(DecadeSelector::Before(1980)),
        (195i32..203).prop_map(|d| DecadeSelector::Decade(d * 10)),
    ]
}

fn any_shapes() -> impl Strategy<Value = BTreeSet<ShapeCategory>> {
    prop::collection::btree_set(any_shape(), 0..=3)
}

proptest! {
    #[test]
    fn shape_and_duration_commute(table in any_table(), shapes in any_shapes(), bucket in any_bucket()) {
        let a = filter_by_duration(&filter_by_shape(&table, &shapes), bucket);
        let b = filter_by_shape(&filter_by_duration(&table, bucket), &shapes);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn decade_and_duration_commute(table in any_table(), decade in any_decade(), bucket in any_bucket()) {
        let a = filter_by_duration(&filter_by_decade(&table, decade), bucket);
        let b = filter_by_decade(&filter_by_duration(&table, bucket), decade);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn shape_and_decade_commute(table in any_table(), shapes in any_shapes(), decade in any_decade()) {
        let a = filter_by_decade(&filter_by_shape(&table, &shapes), decade);
        let b = filter_by_shape(&filter_by_decade(&table, decade), &shapes);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn filters_are_idempotent(
        table in any_table(),
        shapes in any_shapes(),
        bucket in any_bucket(),
        decade in any_decade(),
    ) {
        let once = filter_by_shape(&table, &shapes);
        prop_assert_eq!(filter_by_shape(&once, &shapes), once);
        let once = filter_by_duration(&table, bucket);
        prop_assert_eq!(filter_by_duration(&once, bucket), once);
        let once = filter_by_decade(&table, decade);
        prop_assert_eq!(filter_by_decade(&once, decade), once);
    }

    #[test]
    fn full_shape_set_equals_empty_set(table in any_table()) {
        let all: BTreeSet<_> = ShapeCategory::ALL.into_iter().collect();
        prop_assert_eq!(filter_by_shape(&table, &all), filter_by_shape(&table, &BTreeSet::new()));
    }

    #[test]
    fn short_and_long_partition_the_table(table in any_table()) {
        let short = filter_by_duration(&table, DurationBucket::Short);
        let long = filter_by_duration(&table, DurationBucket::Long);
        prop_assert_eq!(short.len() + long.len(), table.len());
        prop_assert!(short.iter().all(|r| r.duration_seconds.get() < 60));
        prop_assert!(long.iter().all(|r| r.duration_seconds.get() >= 60));
    }

    #[test]
    fn combined_filter_equals_chained_filters(
        table in any_table(),
        shapes in any_shapes(),
        bucket in any_bucket(),
        decade in any_decade(),
    ) {
        let spec = FilterSpec { shapes: shapes.clone(), duration: bucket, decade };
        let chained = filter_by_decade(
            &filter_by_duration(&filter_by_shape(&table, &shapes), bucket),
            decade,
        );
        prop_assert_eq!(apply_filters(&table, &spec), chained);
    }

    #[test]
    fn filtering_never_touches_the_source(table in any_table(), bucket in any_bucket()) {
        let before = table.clone();
        let _ = filter_by_duration(&table, bucket);
        prop_assert_eq!(table, before);
    }
}

#[test]
fn late_december_1999_is_in_the_nineties() {
    let table: SightingTable = vec![report(1999, 120, ShapeCategory::Fireball)]
        .into_iter()
        .collect();
    assert_eq!(filter_by_decade(&table, DecadeSelector::Decade(1990)).len(), 1);
    assert!(filter_by_decade(&table, DecadeSelector::Decade(2000)).is_empty());
}

#[test]
fn sixty_seconds_is_long_not_short() {
    let table: SightingTable = vec![report(2010, 60, ShapeCategory::Circle)]
        .into_iter()
        .collect();
    assert_eq!(filter_by_duration(&table, DurationBucket::Long).len(), 1);
    assert!(filter_by_duration(&table, DurationBucket::Short).is_empty());
}
