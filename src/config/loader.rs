use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, SourceKind};

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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/duocarousel/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("duocarousel").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
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
    /// - Autoplay interval and pause duration are non-zero
    /// - A file source has a path, an HTTP source has a URL
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.autoplay_interval_ms must be greater than zero".to_string(),
            });
        }

        if self.carousel.pause_duration_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "carousel.pause_duration_ms must be greater than zero".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        match self.source.kind {
            SourceKind::File if self.source.path.is_none() => {
                Err(ConfigError::ValidationError {
                    message: "source.path is required when source.kind = \"file\"".to_string(),
                })
            }
            SourceKind::Http => match self.source.url.as_deref() {
                None | Some("") => Err(ConfigError::ValidationError {
                    message: "source.url is required when source.kind = \"http\"".to_string(),
                }),
                Some(url) if !url.starts_with("http://") && !url.starts_with("https://") => {
                    Err(ConfigError::ValidationError {
                        message: format!("source.url '{}' is not an http(s) URL", url),
                    })
                }
                Some(_) => Ok(()),
            },
            _ => Ok(()),
        }
    }
}
