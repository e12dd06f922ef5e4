//! Per-invocation state shared by the command handlers.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Duration;
use sqlx::SqlitePool;
use viralscope_analyzer::{analyze, AnalysisError, Insights};
use viralscope_core::{load_settings, AppConfig, Settings};
use viralscope_db::{connect_store, PoolConfig};

use crate::Outcome;

/// Resolved settings for one command run.
///
/// The store is not held here: each handler opens its own pool and closes it
/// before returning.
#[derive(Debug, Clone)]
pub(crate) struct RunContext {
    pub(crate) settings: Settings,
    pub(crate) database_path: PathBuf,
    default_window_hours: u32,
}

impl RunContext {
    /// Load the settings file and apply environment overrides.
    ///
    /// `config_override` comes from `--config` and must exist; the default
    /// settings path may be absent, in which case built-in defaults apply.
    pub(crate) fn load(app: &AppConfig, config_override: Option<&Path>) -> anyhow::Result<Self> {
        let settings_path = match config_override {
            Some(path) => {
                anyhow::ensure!(
                    path.exists(),
                    "settings file {} does not exist",
                    path.display()
                );
                path.to_path_buf()
            }
            None => app.settings_path.clone(),
        };

        let settings = load_settings(&settings_path)
            .with_context(|| format!("failed to load settings from {}", settings_path.display()))?;
        if !settings_path.exists() {
            tracing::info!(path = %settings_path.display(), "no settings file, using defaults");
        }

        Ok(Self::from_parts(settings, app))
    }

    pub(crate) fn from_parts(settings: Settings, app: &AppConfig) -> Self {
        let database_path = app
            .database_path
            .clone()
            .unwrap_or_else(|| settings.database.path.clone());
        Self {
            settings,
            database_path,
            default_window_hours: app.window_hours,
        }
    }

    /// `--since-hours` if given, otherwise the configured window.
    pub(crate) fn window_hours(&self, since_hours: Option<u32>) -> u32 {
        since_hours.unwrap_or(self.default_window_hours)
    }

    /// Open the store and bring its schema up to date.
    pub(crate) async fn open_store(&self) -> anyhow::Result<SqlitePool> {
        let pool = connect_store(&self.database_path, PoolConfig::default())
            .await
            .with_context(|| format!("failed to open store {}", self.database_path.display()))?;
        let applied = viralscope_db::run_migrations(&pool)
            .await
            .context("failed to apply store migrations")?;
        if applied > 0 {
            tracing::info!(applied, "applied store migrations");
        }
        Ok(pool)
    }
}

/// Read the window and analyze it. `None` means the window was empty.
pub(crate) async fn load_insights(
    pool: &SqlitePool,
    window_hours: u32,
) -> anyhow::Result<Option<Insights>> {
    let records = viralscope_db::fetch_window(pool, window_duration(window_hours))
        .await
        .context("failed to read the analysis window")?;
    tracing::debug!(records = records.len(), window_hours, "window loaded");

    match analyze(&records) {
        Ok(insights) => Ok(Some(insights)),
        Err(AnalysisError::EmptyCorpus) => Ok(None),
    }
}

/// `hours` as a duration, saturating at the largest representable span.
///
/// The start of the window can still fall before the earliest timestamp;
/// the store clamps that case.
pub(crate) fn window_duration(hours: u32) -> Duration {
    Duration::try_hours(i64::from(hours)).unwrap_or(Duration::MAX)
}

/// Tell the user the window was empty.
pub(crate) fn no_data(window_hours: u32) -> Outcome {
    println!("No data available for the last {window_hours} hours. Run `viralscope ingest` first.");
    Outcome::NoData
}
