//! Persisted snapshot of the cleaned table.
//!
//! A snapshot directory holds two files:
//!
//! - `reports.csv`: one [`CleanedReport`](sighting_model::CleanedReport) per
//!   row with an ISO timestamp, integer seconds, and a lowercase category
//! - `manifest.json`: [`SnapshotManifest`] with the source file's SHA-256
//!
//! The manifest is written last, so a snapshot interrupted mid-write is never
//! mistaken for a complete one.

mod hash;
mod io;
mod manifest;

pub use hash::compute_file_hash;
pub use io::{load_snapshot, write_snapshot};
pub use manifest::{MANIFEST_FILE, REPORTS_FILE, SNAPSHOT_SCHEMA_VERSION, SnapshotManifest};
