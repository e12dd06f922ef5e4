use std::path::PathBuf;

/// Process-level configuration read from the environment.
///
/// Analysis settings live in the YAML file at `settings_path`; this struct
/// only carries what has to be known before that file is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub settings_path: PathBuf,
    pub log_level: String,
    /// Overrides `database.path` from the settings file when set.
    pub database_path: Option<PathBuf>,
    /// Size of the analysis window in hours.
    pub window_hours: u32,
}
