//! Settings file loading.
//!
//! Settings are TOML. The first file found wins:
//!
//! 1. `--config PATH` (must exist)
//! 2. `sightings.toml` in the working directory
//! 3. `settings.toml` in the platform config folder
//!    (e.g. `~/.config/sightings/` on Linux)
//!
//! With no file, built-in defaults apply. Missing tables or keys fall back to
//! their defaults; a file that does not parse is an error.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sighting_ingest::PreprocessOptions;
use sighting_model::DecadeConfig;
use sighting_normalize::{CountryAllowList, DEFAULT_ALLOWED_COUNTRIES};
use sighting_query::SummaryOptions;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "sightings";
const APP_NAME: &str = "sightings";
const CONFIG_FILENAME: &str = "settings.toml";

/// Settings file looked up in the working directory.
pub const LOCAL_CONFIG_FILENAME: &str = "sightings.toml";

/// Everything the settings file can configure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ingest: IngestSettings,
    pub filters: DecadeConfig,
    pub summary: SummaryOptions,
}

/// The `[ingest]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestSettings {
    /// Exact country spellings kept during preprocessing.
    pub allowed_countries: Vec<String>,
    /// Snapshot directory, relative to the working directory.
    pub cache_dir: PathBuf,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            allowed_countries: DEFAULT_ALLOWED_COUNTRIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            cache_dir: PathBuf::from(".sightings-cache"),
        }
    }
}

impl Settings {
    pub fn preprocess_options(&self) -> PreprocessOptions {
        PreprocessOptions {
            allowed_countries: CountryAllowList::new(self.ingest.allowed_countries.iter().cloned()),
        }
    }
}

/// Path of the per-user settings file, if the platform has one.
pub fn user_settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Resolve and load settings. Returns the file used, if any.
pub fn load_settings(explicit: Option<&Path>) -> Result<(Settings, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let settings = read_settings(path)?;
        return Ok((settings, Some(path.to_path_buf())));
    }

    let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILENAME)).chain(user_settings_path());
    for path in candidates {
        if path.is_file() {
            let settings = read_settings(&path)?;
            return Ok((settings, Some(path)));
        }
    }

    tracing::debug!("no settings file found, using defaults");
    Ok((Settings::default(), None))
}

/// Parse one settings file.
pub fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings: Settings = toml::from_str(&content)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_round_trip() {
        let settings = Settings::default();
        let text = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_empty_file_is_defaults() {
        let parsed: Settings = toml::from_str("").unwrap();
        assert_eq!(parsed, Settings::default());
        assert_eq!(parsed.filters.pre_threshold, Some(1980));
    }

    #[test]
    fn test_partial_tables() {
        let parsed: Settings = toml::from_str(
            r#"
            [ingest]
            allowed_countries = ["Canada"]

            [filters]
            decades = [1990, 2000]

            [summary]
            top_words = 3
            "#,
        )
        .unwrap();

        assert_eq!(parsed.ingest.allowed_countries, vec!["Canada"]);
        assert_eq!(parsed.ingest.cache_dir, PathBuf::from(".sightings-cache"));
        assert_eq!(parsed.filters.decades, vec![1990, 2000]);
        assert_eq!(parsed.filters.pre_threshold, None);
        assert_eq!(parsed.summary.top_words, 3);
        assert_eq!(parsed.summary.histogram_bins, 50);

        let options = parsed.preprocess_options();
        assert!(options.allowed_countries.allows("Canada"));
        assert!(!options.allowed_countries.allows("USA"));
    }
}
