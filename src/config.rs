//! Configuration management for the ColdTrack client

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct RecordStoreConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReferenceStoreConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub store: RecordStoreConfig,
    #[serde(default)]
    pub references: ReferenceStoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix COLDTRACK_)
            .add_source(
                Environment::with_prefix("COLDTRACK")
                    .separator("_")
                    .try_parsing(true),
            )
            // Override record store URL from COLDTRACK_API_URL env var if present
            .set_override_option("store.base_url", env::var("COLDTRACK_API_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for RecordStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://66f616ba436827ced975e4d6.mockapi.io/api/v1".to_string(),
        }
    }
}

impl Default for ReferenceStoreConfig {
    fn default() -> Self {
        Self {
            path: ".coldtrack/references.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
