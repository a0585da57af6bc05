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
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stacks-mint/config.toml` on Unix/macOS, or the
    /// equivalent elsewhere via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stacks-mint").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`; an existing file must
    /// parse and validate.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path (`--config`).
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
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contract.address.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "contract.address must not be empty".to_string(),
            });
        }
        if self.contract.name.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "contract.name must not be empty".to_string(),
            });
        }
        if let Some(base) = &self.api.base_url {
            if !base.starts_with("http://") && !base.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("api.base_url '{}' is not an http(s) URL", base),
                });
            }
        }
        if let Some(signer) = &self.wallet.signer_url {
            if !signer.starts_with("http://") && !signer.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!("wallet.signer_url '{}' is not an http(s) URL", signer),
                });
            }
        }
        Ok(())
    }
}
