use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "RESOURCE_LOADER_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `$RESOURCE_LOADER_CONFIG` wins when set. Otherwise uses
    /// `resource-loader/config.toml` under `dirs::config_dir()`, falling
    /// back to the current directory.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("resource-loader").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from a path the user named explicitly.
    ///
    /// Unlike [`load_from`](Self::load_from), a missing file is an error.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Self::load_from(path)
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both timeouts are non-zero
    /// - The base URL is not empty
    /// - The payload pointer is empty or starts with '/'
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_seconds == 0 || self.http.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.source.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.base_url must not be empty".to_string(),
            });
        }

        let pointer = &self.source.payload_pointer;
        if !pointer.is_empty() && !pointer.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("Payload pointer '{}' must start with '/'", pointer),
            });
        }

        Ok(())
    }
}
