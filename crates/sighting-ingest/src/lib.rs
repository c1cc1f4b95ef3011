//! Sighting report ingestion.
//!
//! This crate turns the raw sighting CSV into the cleaned, typed
//! [`SightingTable`](sighting_model::SightingTable) and caches the result on
//! disk so later runs can skip preprocessing.
//!
//! # Features
//!
//! - **CSV Loading**: Read the raw file with Polars, every column as text
//! - **Preprocessing**: Allow-list, timestamp, duration, and shape passes with drop statistics
//! - **Snapshot Cache**: Flat CSV + JSON manifest keyed by the source file's SHA-256
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sighting_ingest::{PreprocessOptions, load_or_build};
//!
//! let outcome = load_or_build(
//!     Path::new("data/nuforc.csv"),
//!     Path::new(".sightings-cache"),
//!     &PreprocessOptions::default(),
//!     false,
//! )?;
//! println!("{} reports", outcome.table.len());
//! ```

mod cache;
mod error;
mod preprocess;
mod raw;
mod reader;
mod snapshot;

// === Error Types ===
pub use error::{IngestError, Result, SnapshotError};

// === CSV Reading ===
pub use reader::{
    MAX_CSV_FILE_SIZE, OPTIONAL_COLUMNS, REQUIRED_COLUMNS, check_file_size,
    check_file_size_with_limit, raw_reports_from_frame, read_raw_reports, read_raw_table,
    validate_encoding,
};

// === Raw Rows ===
pub use raw::RawReport;

// === Preprocessing ===
pub use preprocess::{DropReason, PreprocessOptions, PreprocessStats, clean_report, preprocess};

// === Snapshot Cache ===
pub use cache::{CacheOutcome, load_or_build};
pub use snapshot::{
    MANIFEST_FILE, REPORTS_FILE, SNAPSHOT_SCHEMA_VERSION, SnapshotManifest, compute_file_hash,
    load_snapshot, write_snapshot,
};
