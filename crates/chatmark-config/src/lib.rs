//! Config file for the `chatmark` binary.
//!
//! Besides the server address and user, the file carries a `[render]` table
//! that deserialises straight into the engine's `RenderOptions`. The server
//! address can be overridden by `CHATMARK_SERVER` or a command-line flag
//! (see [`Config::with_server_override`]).

use chatmark_engine::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding `server_url`.
pub const SERVER_ENV: &str = "CHATMARK_SERVER";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the chat server, without a trailing slash.
    pub server_url: String,
    /// User id sent with chat and conversation requests.
    pub username: Option<String>,
    /// IANA timezone name sent with each chat message.
    pub timezone: Option<String>,
    /// `[render]` table.
    pub render: RenderOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            username: None,
            timezone: None,
            render: RenderOptions::default(),
        }
    }
}

impl Config {
    /// Reads the file at `config_path`, or `Ok(None)` if it does not exist.
    ///
    /// A trailing `/` on `server_url` is dropped so request paths can be appended.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        config.server_url = Self::normalize_url(&config.server_url);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/chatmark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Applies `CHATMARK_SERVER` and then an explicit flag value, in that order.
    pub fn with_server_override(mut self, flag: Option<&str>) -> Self {
        if let Ok(env_url) = std::env::var(SERVER_ENV) {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                self.server_url = Self::normalize_url(trimmed);
            }
        }
        if let Some(flag) = flag {
            self.server_url = Self::normalize_url(flag);
        }
        self
    }

    fn normalize_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }
}
