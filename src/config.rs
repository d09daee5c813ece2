use dioxus::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_CATALOG_URL: &str = "https://openlibrary.org";
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org";
pub const DEFAULT_RESULT_LIMIT: u32 = 30;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    InvalidLimit { key: &'static str, value: String },
    #[error("{key} must be an http(s) URL, got '{value}'")]
    InvalidUrl { key: &'static str, value: String },
}

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
/// In release builds: reads the environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the catalog search API (without trailing slash)
    pub catalog_url: String,
    /// Base URL of the cover image service (without trailing slash)
    pub covers_url: String,
    /// Maximum number of records requested per search
    pub result_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            covers_url: DEFAULT_COVERS_URL.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        match Self::from_lookup(|key| std::env::var(key).ok()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Config: {}, falling back to defaults", e);
                Self::default()
            }
        }
    }

    /// Build configuration from a key lookup, applying defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("BOOKFINDER_CATALOG_URL") {
            config.catalog_url = parse_base_url("BOOKFINDER_CATALOG_URL", &url)?;
        }

        if let Some(url) = lookup("BOOKFINDER_COVERS_URL") {
            config.covers_url = parse_base_url("BOOKFINDER_COVERS_URL", &url)?;
        }

        if let Some(limit) = lookup("BOOKFINDER_RESULT_LIMIT") {
            config.result_limit = match limit.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidLimit {
                        key: "BOOKFINDER_RESULT_LIMIT",
                        value: limit,
                    })
                }
            };
        }

        info!(
            "Config: catalog={}, covers={}, limit={}",
            config.catalog_url, config.covers_url, config.result_limit
        );

        Ok(config)
    }
}

fn parse_base_url(key: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl {
            key,
            value: value.to_string(),
        })
    }
}

/// Read the configuration provided by the app root
pub fn use_config() -> Config {
    use_context::<Config>()
}
