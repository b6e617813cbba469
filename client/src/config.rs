//! Configuration management for the inventory client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with INVENTORY__ prefix

use config::{ConfigError, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Inventory API configuration
    pub api: ApiConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Root address of the inventory API, e.g. http://localhost:8080/api
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default tracing filter, used when RUST_LOG is unset
    pub filter: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(None)
    }

    /// Load configuration, reading overrides from `env` instead of the
    /// process environment when given
    pub fn load_with(env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        let environment = env
            .as_ref()
            .and_then(|vars| vars.get("INVENTORY_ENVIRONMENT").cloned())
            .or_else(|| std::env::var("INVENTORY_ENVIRONMENT").ok())
            .unwrap_or_else(|| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("logging.filter", "inventory_client=info")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (INVENTORY__ prefix)
            .add_source(
                Environment::with_prefix("INVENTORY")
                    .separator("__")
                    .source(env),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        if config.api.base_url.trim().is_empty() {
            return Err(ConfigError::Message("api.base_url must not be empty".into()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::load_with(Some(Map::new())).unwrap();
        assert_eq!(config.environment, "development");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.logging.filter, "inventory_client=info");
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::load_with(Some(vars(&[(
            "INVENTORY__API__BASE_URL",
            "https://inventario.example.com/api",
        )])))
        .unwrap();
        assert_eq!(config.api.base_url, "https://inventario.example.com/api");
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = Config::load_with(Some(vars(&[("INVENTORY__API__BASE_URL", "  ")])));
        assert!(result.is_err());
    }
}
