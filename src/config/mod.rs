//! Configuration management for VendorHub

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// API origin used when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Environment variable that selects the API origin
pub const API_URL_ENV: &str = "VENDORHUB_API_URL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API origin, e.g. `https://vendorhub.example.com`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>,

    /// Default staleness window for cached reads, in seconds
    #[serde(default = "default_stale_time_secs")]
    pub stale_time_secs: u64,

    /// HTTP request timeout, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_stale_time_secs() -> u64 {
    5 * 60
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: None,
            stale_time_secs: default_stale_time_secs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Directory holding the config and session files (`~/.vendorhub`)
    pub fn default_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".vendorhub"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::default_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override into a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path, falling back to defaults
    /// when the file does not exist yet.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match Self::load_from(Self::resolve_path(path)?) {
            Ok(config) => Ok(config),
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to an optional path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Resolve the API origin.
    ///
    /// Precedence: explicit override (CLI flag or `VENDORHUB_API_URL`) >
    /// config file > built-in default.
    pub fn api_base_url(&self, override_url: Option<&str>) -> String {
        override_url
            .map(str::to_string)
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// Uniform staleness window applied to every cached read
    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_secs)
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout_secs must be greater than zero".into()).into());
        }
        if let Some(url) = &self.api_base_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(
                ConfigError::Invalid(format!("api_base_url must be an http(s) URL: {url}")).into(),
            );
        }
        Ok(())
    }
}
