//! Client Configuration
//!
//! Everything is fixed at build time: `TODO_API_BASE_URL` and
//! `TODO_LOG_LEVEL` are read with `option_env!` when the crate is compiled.

use std::str::FromStr;

use log::LevelFilter;
use url::Url;

use crate::error::ConfigError;

/// Base URL used when `TODO_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Log level used when `TODO_LOG_LEVEL` is not set or not recognised
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub log_level: LevelFilter,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: parse_base_url(DEFAULT_BASE_URL).expect("default base url is valid"),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build a config for an explicit base URL
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            log_level: DEFAULT_LOG_LEVEL,
        })
    }

    /// Read the values baked in at compile time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("TODO_API_BASE_URL"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::new(base_url.unwrap_or(DEFAULT_BASE_URL))?;
        config.log_level = parse_log_level(log_level);
        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot carry a path".to_string()));
    }
    Ok(url)
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|s| LevelFilter::from_str(s.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
