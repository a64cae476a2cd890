//! Configuration management for the Obras Inventory host application
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with OBRAS_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Local key-value storage
    pub storage: StorageConfig,

    /// Material snapshot fetched on first load
    pub snapshot: SnapshotConfig,

    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one JSON file per storage key
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SnapshotConfig {
    /// URL of the JSON array of materials
    pub url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// Default tracing filter, used when RUST_LOG is not set
    pub filter: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("OBRAS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("storage.dir", "data")?
            .set_default(
                "snapshot.url",
                "http://localhost:4200/assets/mock/materiales.json",
            )?
            .set_default("snapshot.timeout_secs", 10)?
            .set_default("log.filter", "obras_inventory=debug,shared=debug")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (OBRAS_ prefix)
            .add_source(
                Environment::with_prefix("OBRAS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
