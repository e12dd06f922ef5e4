//! Shared types for viralscope: the video `Record`, YAML settings, and the
//! env-driven application config.

pub mod app_config;
pub mod config;
pub mod record;
pub mod settings;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use record::Record;
pub use settings::{load_settings, ReportFormat, Settings};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("record has an empty id")]
    EmptyRecordId,
    #[error("record {id}: likes ({likes}) exceed views ({views})")]
    LikesExceedViews { id: String, likes: u64, views: u64 },
    #[error("record {id}: duration must be positive")]
    NonPositiveDuration { id: String },
    #[error("record {id}: hook time must be positive")]
    NonPositiveHookTime { id: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
    #[error("failed to read settings file {path}: {source}")]
    SettingsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file: {0}")]
    SettingsFileParse(#[from] serde_yaml::Error),
    #[error("settings validation failed: {0}")]
    Validation(String),
}
