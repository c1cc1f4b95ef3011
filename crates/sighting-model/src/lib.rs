//! Domain types for the sighting-report pipeline.
//!
//! This crate holds the typed vocabulary shared by the normalizer, the
//! ingest pass, and the query layer:
//!
//! - **Reports**: [`CleanedReport`] rows and the immutable [`SightingTable`] snapshot
//! - **Categories**: the five-way [`ShapeCategory`] and the seven [`DurationUnit`]s
//! - **Filters**: [`FilterSpec`] with its [`DurationBucket`] and [`DecadeSelector`] parts
//! - **Sentiment**: [`SentimentLabel`] classification of pre-computed polarity scores

pub mod decade;
pub mod duration;
pub mod error;
pub mod filter;
pub mod report;
pub mod sentiment;
pub mod shape;

pub use decade::{DecadeConfig, DecadeSelector};
pub use duration::{DurationBucket, DurationUnit, SHORT_DURATION_LIMIT_SECONDS};
pub use error::{ModelError, Result};
pub use filter::FilterSpec;
pub use report::{CleanedReport, SightingTable};
pub use sentiment::{DEFAULT_SENTIMENT_THRESHOLD, SentimentLabel};
pub use shape::ShapeCategory;
