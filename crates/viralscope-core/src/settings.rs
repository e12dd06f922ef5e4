use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_SOURCE: &str = "mock";
const DEFAULT_BATCH_SIZE: usize = 50;
const DEFAULT_OUTPUT_DIR: &str = "generated/charts";
const DEFAULT_DATABASE_PATH: &str = "viral_videos.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Charts,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "text"),
            ReportFormat::Charts => write!(f, "charts"),
        }
    }
}

/// Contents of `config/config.yaml`.
///
/// Every section and every key carries its own default, so a partial file
/// only overrides the keys it names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub scraper: ScraperSettings,
    pub reporter: ReporterSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    /// Name of the record source; only `mock` ships today.
    pub source: String,
    pub batch_size: usize,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterSettings {
    pub formats: BTreeSet<ReportFormat>,
    pub output_dir: PathBuf,
}

impl Default for ReporterSettings {
    fn default() -> Self {
        Self {
            formats: BTreeSet::from([ReportFormat::Text, ReportFormat::Charts]),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl ReporterSettings {
    #[must_use]
    pub fn wants(&self, format: ReportFormat) -> bool {
        self.formats.contains(&format)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }
}

/// Load settings from a YAML file, falling back to built-in defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, parsed, or
/// fails validation.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SettingsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let settings = parse_settings(&content)?;
    validate_settings(&settings)?;
    Ok(settings)
}

fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    // An empty YAML document deserializes to null, not to an empty mapping.
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(content).map_err(ConfigError::SettingsFileParse)
}

fn validate_settings(settings: &Settings) -> Result<(), ConfigError> {
    if settings.scraper.batch_size == 0 {
        return Err(ConfigError::Validation(
            "scraper.batch_size must be greater than zero".to_string(),
        ));
    }
    if settings.scraper.source.trim().is_empty() {
        return Err(ConfigError::Validation(
            "scraper.source must be non-empty".to_string(),
        ));
    }
    if settings.database.path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "database.path must be non-empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
