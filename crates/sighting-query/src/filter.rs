//! The record filter set.
//!
//! Each filter borrows the shared table and returns a new one, so the cleaned
//! population loaded at startup is never modified. The three filters commute
//! and each is idempotent.

use std::collections::BTreeSet;

use sighting_model::{
    DecadeConfig, DecadeSelector, DurationBucket, FilterSpec, ShapeCategory, SightingTable,
};

/// Keep reports whose shape is in `shapes`. An empty set keeps everything.
pub fn filter_by_shape(table: &SightingTable, shapes: &BTreeSet<ShapeCategory>) -> SightingTable {
    if shapes.is_empty() {
        return table.clone();
    }
    table.filtered(|report| shapes.contains(&report.shape))
}

/// Keep reports in the duration bucket. `All` keeps everything.
pub fn filter_by_duration(table: &SightingTable, bucket: DurationBucket) -> SightingTable {
    match bucket {
        DurationBucket::All => table.clone(),
        _ => table.filtered(|report| bucket.contains(report.duration_seconds)),
    }
}

/// Keep reports whose year the selector covers. `All` keeps everything.
pub fn filter_by_decade(table: &SightingTable, decade: DecadeSelector) -> SightingTable {
    match decade {
        DecadeSelector::All => table.clone(),
        _ => table.filtered(|report| decade.contains_year(report.year())),
    }
}

/// Apply all three filters in a single pass.
pub fn apply_filters(table: &SightingTable, spec: &FilterSpec) -> SightingTable {
    let _span = tracing::info_span!("query", filter = %spec).entered();

    let filtered = if spec.is_unrestricted() {
        table.clone()
    } else {
        table.filtered(|report| {
            (spec.shapes.is_empty() || spec.shapes.contains(&report.shape))
                && spec.duration.contains(report.duration_seconds)
                && spec.decade.contains_year(report.year())
        })
    };

    tracing::debug!(input = table.len(), matched = filtered.len(), "filters applied");
    filtered
}

/// Build a [`FilterSpec`] from raw widget labels, warning about any label
/// that falls outside its domain. Unknown labels never restrict the view.
pub fn filter_spec_from_labels<S: AsRef<str>>(
    shapes: &[S],
    duration: &str,
    decade: &str,
    decades: &DecadeConfig,
) -> FilterSpec {
    for label in shapes {
        if label.as_ref().parse::<ShapeCategory>().is_err() {
            tracing::warn!(label = label.as_ref(), "ignoring unknown shape label");
        }
    }
    if duration.parse::<DurationBucket>().is_err() {
        tracing::warn!(label = duration, "unknown duration label, showing all durations");
    }
    if let Err(e) = DecadeSelector::parse(decade, decades) {
        tracing::warn!(label = decade, error = %e, "unknown decade label, showing all years");
    }
    FilterSpec::from_labels(shapes, duration, decade, decades)
}
