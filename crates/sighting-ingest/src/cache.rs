//! Build-or-reuse logic around the snapshot.

use std::path::Path;

use sighting_model::SightingTable;

use crate::error::Result;
use crate::preprocess::{PreprocessOptions, PreprocessStats, preprocess};
use crate::reader::{check_file_size, raw_reports_from_frame, read_raw_table};
use crate::snapshot::{SnapshotManifest, compute_file_hash, load_snapshot, write_snapshot};

/// Result of [`load_or_build`].
#[derive(Debug, Clone)]
pub struct CacheOutcome {
    pub table: SightingTable,
    pub manifest: SnapshotManifest,
    /// Present only when the table was rebuilt from the source file.
    pub stats: Option<PreprocessStats>,
}

impl CacheOutcome {
    /// Returns true if the snapshot was reused without preprocessing.
    pub fn reused(&self) -> bool {
        self.stats.is_none()
    }
}

/// Load the cleaned table for `source`, preprocessing only when needed.
///
/// The snapshot in `cache_dir` is reused when its manifest records the
/// current SHA-256 of `source` and the fingerprint of `options`. A stale,
/// unreadable, or missing snapshot is rebuilt; `force` always rebuilds.
pub fn load_or_build(
    source: &Path,
    cache_dir: &Path,
    options: &PreprocessOptions,
    force: bool,
) -> Result<CacheOutcome> {
    check_file_size(source)?;
    let source_hash = compute_file_hash(source)?;
    let options_hash = options.fingerprint();

    if force {
        tracing::info!("rebuild forced, ignoring existing snapshot");
    } else if let Some(outcome) = try_reuse(cache_dir, &source_hash, &options_hash) {
        return Ok(outcome);
    }

    let raws = raw_reports_from_frame(&read_raw_table(source)?, source)?;
    let (table, stats) = preprocess(raws, options);
    let manifest = write_snapshot(cache_dir, &table, &source_hash, &options_hash)?;

    Ok(CacheOutcome {
        table,
        manifest,
        stats: Some(stats),
    })
}

fn try_reuse(cache_dir: &Path, source_hash: &str, options_hash: &str) -> Option<CacheOutcome> {
    if !cache_dir.join(crate::snapshot::MANIFEST_FILE).exists() {
        tracing::debug!(path = %cache_dir.display(), "no snapshot found");
        return None;
    }

    match load_snapshot(cache_dir) {
        Ok((manifest, _)) if !manifest.matches_source(source_hash) => {
            tracing::info!("source file changed since snapshot, rebuilding");
            None
        }
        Ok((manifest, _)) if !manifest.matches_options(options_hash) => {
            tracing::info!("preprocess settings changed since snapshot, rebuilding");
            None
        }
        Ok((manifest, table)) => {
            tracing::info!(rows = table.len(), "reusing snapshot");
            Some(CacheOutcome {
                table,
                manifest,
                stats: None,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "snapshot unreadable, rebuilding");
            None
        }
    }
}
