//! Configuration loaded from `<config_dir>/brewflow/config.toml`

use crate::core::error::Error;
use crate::core::tables::DEFAULT_TABLE_COUNT;
use crate::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Fixed delay of the mock menu and order loaders
    pub mock_latency_ms: u64,
    pub table_count: u32,
    /// Symbol printed in front of amounts
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openrouter_api_key: None,
            model: "openai/gpt-4o-mini".to_string(),
            base_url: "https://openrouter.ai/api/v1".to_string(),
            mock_latency_ms: 500,
            table_count: DEFAULT_TABLE_COUNT,
            currency: "₹".to_string(),
        }
    }
}

impl Config {
    /// Parses a TOML document; absent keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn mock_latency(&self) -> Duration {
        Duration::from_millis(self.mock_latency_ms)
    }

    /// The API key from the environment, falling back to the file
    pub fn api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        match &self.openrouter_api_key {
            Some(key) if !key.is_empty() => Ok(key.clone()),
            _ => Err(Error::InvalidState(format!(
                "API key not found. Set {} or configure {}",
                API_KEY_ENV,
                config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "config.toml".to_string())
            ))),
        }
    }
}

/// Default location of the config file, if the platform has a config directory
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("brewflow").join("config.toml"))
}

/// Loads the config from `path` or the default location.
///
/// An unreadable or malformed default file falls back to defaults with a
/// warning; an explicitly given path must parse.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Config::from_path(path);
    }

    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    match Config::from_path(&path) {
        Ok(config) => Ok(config),
        Err(e) => {
            log::warn!("Ignoring config at {}: {}", path.display(), e);
            Ok(Config::default())
        }
    }
}
