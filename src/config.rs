use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "social_media_engagement_enhanced.csv";
pub const DEFAULT_EXPORT_NAME: &str = "filtered_social_media_data.csv";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Startup settings for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV loaded at startup.
    pub data_path: PathBuf,
    /// File name suggested by the export dialog.
    pub export_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            export_file_name: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

impl Config {
    /// Read `SOCIAL_PULSE_DATA` and `SOCIAL_PULSE_EXPORT_NAME` from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        build_config(|key| std::env::var(key))
    }
}

/// Parsing and validation, decoupled from the real environment so tests can
/// feed a map.
fn build_config<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let data_path = PathBuf::from(or_default("SOCIAL_PULSE_DATA", DEFAULT_DATA_PATH));

    let export_file_name = or_default("SOCIAL_PULSE_EXPORT_NAME", DEFAULT_EXPORT_NAME);
    if !export_file_name.to_ascii_lowercase().ends_with(".csv") {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOCIAL_PULSE_EXPORT_NAME".to_string(),
            reason: format!("'{export_file_name}' must end in .csv"),
        });
    }

    Ok(Config {
        data_path,
        export_file_name,
    })
}
