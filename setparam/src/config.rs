//! Settings for the setparam tool
//!
//! Settings are read from an optional `setparam.toml` in the working
//! directory. Every field has a default, so the file is never required.
//! The rewritten file itself is fixed and cannot be changed here.

use serde::Deserialize;
use std::path::Path;

/// Name of the optional settings file looked up in the working directory.
pub const SETTINGS_FILE: &str = "setparam.toml";

/// Tool settings
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Log level filter (default: "setparam=warn")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "setparam=warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file
    ///
    /// If the file doesn't exist, returns default settings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e.to_string()))
    }
}

/// Settings file errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ReadError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, err) => {
                write!(f, "Failed to read settings file '{}': {}", path, err)
            }
            ConfigError::ParseError(path, err) => {
                write!(f, "Failed to parse settings file '{}': {}", path, err)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
