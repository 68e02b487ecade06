use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
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
    /// Returns the default path to the configuration file.
    ///
    /// Uses `~/.config/itemdeck/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("itemdeck").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML. Validation is left to the caller so
    ///   command-line overrides can be applied first.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint URL is an http(s) URL
    /// - Timeouts and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.endpoint.url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Endpoint URL must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Endpoint URL '{}' must start with http:// or https://", url),
            });
        }
        if self.endpoint.timeout_seconds == 0 || self.endpoint.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Endpoint timeouts must be greater than zero".to_string(),
            });
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "UI tick rate must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_http_url() {
        let mut config = Config::default();
        config.endpoint.url = "ftp://example.com/items".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = Config::default();
        config.endpoint.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }
}
