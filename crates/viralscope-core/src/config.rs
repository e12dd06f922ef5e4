use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SETTINGS_PATH: &str = "config/config.yaml";
pub const DEFAULT_WINDOW_HOURS: u32 = 24;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can pass a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let settings_path = PathBuf::from(or_default("VIRALSCOPE_CONFIG", DEFAULT_SETTINGS_PATH));
    let log_level = or_default("VIRALSCOPE_LOG_LEVEL", "info");
    let database_path = lookup("VIRALSCOPE_DATABASE_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    let window_hours = parse_u32("VIRALSCOPE_WINDOW_HOURS", "24")?;
    if window_hours == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VIRALSCOPE_WINDOW_HOURS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        settings_path,
        log_level,
        database_path,
        window_hours,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
