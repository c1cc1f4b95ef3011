//! Snapshot manifest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current on-disk layout version.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 2;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const REPORTS_FILE: &str = "reports.csv";

/// Describes a written snapshot and the source it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotManifest {
    pub schema_version: u32,
    /// Hex SHA-256 of the raw source file.
    pub source_sha256: String,
    /// Fingerprint of the preprocessing settings the table was built with.
    #[serde(default)]
    pub options_sha256: String,
    pub row_count: usize,
    pub created_at: DateTime<Utc>,
}

impl SnapshotManifest {
    pub fn new(
        source_sha256: impl Into<String>,
        options_sha256: impl Into<String>,
        row_count: usize,
    ) -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            source_sha256: source_sha256.into(),
            options_sha256: options_sha256.into(),
            row_count,
            created_at: Utc::now(),
        }
    }

    /// Returns true if this snapshot was built from a file with `hash`.
    pub fn matches_source(&self, hash: &str) -> bool {
        self.source_sha256.eq_ignore_ascii_case(hash)
    }

    /// Returns true if this snapshot was built with the settings `fingerprint`.
    pub fn matches_options(&self, fingerprint: &str) -> bool {
        self.options_sha256.eq_ignore_ascii_case(fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_without_options_matches_nothing() {
        let json = r#"{
            "schema_version": 1,
            "source_sha256": "abc",
            "row_count": 0,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let manifest: SnapshotManifest = serde_json::from_str(json).unwrap();
        assert!(manifest.matches_source("ABC"));
        assert!(!manifest.matches_options("def"));
    }
}
