use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

impl Config {
    /// Path to the configuration file: `gameshell/config.toml` under
    /// the platform config directory, falling back to the current
    /// directory when no config directory exists.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("gameshell").join("config.toml")
    }

    /// Load from the default config file. A missing file yields
    /// `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path. A missing file yields
    /// `Config::default()`; read, parse, and validation failures are
    /// errors.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Shape checks that do not need the route table. Whether the start
    /// path actually resolves is decided by the router at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.start_path.starts_with('/') {
            return Err(ConfigError::Validation {
                message: format!("start_path '{}' must be absolute", self.start_path),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Validation {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
