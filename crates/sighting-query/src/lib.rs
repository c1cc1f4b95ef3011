//! Queries over the cleaned sighting table.
//!
//! - **Filters**: shape set, duration bucket, and decade, each a pure
//!   function from a borrowed [`SightingTable`](sighting_model::SightingTable)
//!   to a new one
//! - **Frames**: the table as a Polars `DataFrame` for export
//! - **Summaries**: the prepared tables chart renderers consume

mod error;
mod filter;
mod frame;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use error::{QueryError, Result};
pub use filter::{
    apply_filters, filter_by_decade, filter_by_duration, filter_by_shape, filter_spec_from_labels,
};
pub use frame::{TIMESTAMP_FORMAT, table_frame};
pub use summary::{SummaryKind, SummaryOptions, summarize};
