//! Configuration management for the Inventory Console client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with INVCON_ prefix

use std::path::PathBuf;
use std::time::Duration;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Remote API configuration
    pub api: ApiConfig,

    /// Session and credential-store configuration
    pub session: SessionConfig,

    /// Background polling configuration
    pub polling: PollingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote API, every endpoint path is joined to it
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Directory holding the persisted token and user profile
    pub storage_dir: PathBuf,

    /// Inactivity window before an inventory session is logged out, seconds
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PollingConfig {
    /// Period of the notification/discrepancy counter polls, seconds
    pub interval_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment =
            std::env::var("INVCON_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:5000/api")?
            .set_default("session.storage_dir", ".inventory-console")?
            .set_default("session.idle_timeout_secs", 300)?
            .set_default("polling.interval_secs", 5)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (INVCON_ prefix)
            .add_source(
                Environment::with_prefix("INVCON")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

impl PollingConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_load() {
        let config = Config::load().expect("default configuration should load");
        assert!(!config.api.base_url.is_empty());
        assert_eq!(config.session.idle_timeout(), Duration::from_secs(300));
        assert_eq!(config.polling.interval(), Duration::from_secs(5));
    }
}
