//! Snapshot reading and writing.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use sighting_model::{CleanedReport, SightingTable};

use super::manifest::{MANIFEST_FILE, REPORTS_FILE, SNAPSHOT_SCHEMA_VERSION, SnapshotManifest};
use crate::error::SnapshotError;

/// Write `table` into `dir`, replacing any previous snapshot.
///
/// Each file goes through a temp file and a rename; the manifest is renamed
/// into place after the reports.
pub fn write_snapshot(
    dir: &Path,
    table: &SightingTable,
    source_sha256: &str,
    options_sha256: &str,
) -> Result<SnapshotManifest, SnapshotError> {
    fs::create_dir_all(dir).map_err(|e| SnapshotError::Io {
        operation: "create directory",
        path: dir.to_path_buf(),
        source: e,
    })?;

    let reports_path = dir.join(REPORTS_FILE);
    let reports = encode_reports(table, &reports_path)?;
    write_atomic(&reports_path, &reports)?;

    let manifest = SnapshotManifest::new(source_sha256, options_sha256, table.len());
    let manifest_path = dir.join(MANIFEST_FILE);
    let json = serde_json::to_vec_pretty(&manifest).map_err(|e| SnapshotError::Manifest {
        path: manifest_path.clone(),
        source: e,
    })?;
    write_atomic(&manifest_path, &json)?;

    tracing::info!(
        path = %dir.display(),
        rows = manifest.row_count,
        "saved snapshot"
    );
    Ok(manifest)
}

/// Load a snapshot previously written by [`write_snapshot`].
pub fn load_snapshot(dir: &Path) -> Result<(SnapshotManifest, SightingTable), SnapshotError> {
    let manifest_path = dir.join(MANIFEST_FILE);
    let bytes = fs::read(&manifest_path).map_err(|e| SnapshotError::Io {
        operation: "read",
        path: manifest_path.clone(),
        source: e,
    })?;
    let manifest: SnapshotManifest =
        serde_json::from_slice(&bytes).map_err(|e| SnapshotError::Manifest {
            path: manifest_path.clone(),
            source: e,
        })?;

    if manifest.schema_version > SNAPSHOT_SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: manifest.schema_version,
            max_supported: SNAPSHOT_SCHEMA_VERSION,
            path: manifest_path,
        });
    }

    let reports_path = dir.join(REPORTS_FILE);
    let rows_error = |e| SnapshotError::Rows {
        path: reports_path.clone(),
        source: e,
    };
    let mut reader = csv::Reader::from_path(&reports_path).map_err(rows_error)?;
    let reports = reader
        .deserialize::<CleanedReport>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(rows_error)?;

    if reports.len() != manifest.row_count {
        return Err(SnapshotError::RowCountMismatch {
            expected: manifest.row_count,
            found: reports.len(),
            path: reports_path,
        });
    }

    tracing::debug!(path = %dir.display(), rows = reports.len(), "loaded snapshot");
    Ok((manifest, SightingTable::new(reports)))
}

fn encode_reports(table: &SightingTable, path: &Path) -> Result<Vec<u8>, SnapshotError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for report in table {
        writer.serialize(report).map_err(|e| SnapshotError::Rows {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.into_inner().map_err(|e| SnapshotError::Io {
        operation: "encode",
        path: path.to_path_buf(),
        source: e.into_error(),
    })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), SnapshotError> {
    let temp_path = path.with_extension("tmp");

    let mut file = File::create(&temp_path).map_err(|e| SnapshotError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| SnapshotError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| SnapshotError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| SnapshotError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_table_round_trips() {
        let dir = tempdir().unwrap();
        write_snapshot(dir.path(), &SightingTable::default(), "abc", "def").unwrap();

        let (manifest, table) = load_snapshot(dir.path()).unwrap();
        assert_eq!(manifest.row_count, 0);
        assert!(table.is_empty());
        assert!(!dir.path().join("reports.tmp").exists());
    }

    #[test]
    fn test_missing_manifest_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_snapshot(dir.path()),
            Err(SnapshotError::Io { .. })
        ));
    }

    #[test]
    fn test_future_version_is_rejected() {
        let dir = tempdir().unwrap();
        write_snapshot(dir.path(), &SightingTable::default(), "abc", "def").unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        let json = fs::read_to_string(&path)
            .unwrap()
            .replace(
                &format!("\"schema_version\": {SNAPSHOT_SCHEMA_VERSION}"),
                "\"schema_version\": 99",
            );
        fs::write(&path, json).unwrap();

        assert!(matches!(
            load_snapshot(dir.path()),
            Err(SnapshotError::UnsupportedVersion { found: 99, .. })
        ));
    }
}
