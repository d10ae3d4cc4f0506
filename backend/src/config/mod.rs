//! Configuration management for the FitSync backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FS__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub redis: RedisConfig,
    #[serde(default)]
    pub plans: PlansConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

/// Redis configuration
///
/// Profiles and progress live in Redis when enabled; otherwise (or when
/// Redis is unreachable at startup) they are kept in process memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    pub enabled: bool,
    pub url: String,
}

/// Plan lookup behaviour
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlansConfig {
    /// Fall through to the derivation engine when the seeded catalog has no
    /// entry for the requested key. Off by default: only seeded keys resolve.
    pub derive_on_miss: bool,
}

/// Domain event delivery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsConfig {
    /// Broadcast buffer; slow subscribers drop events past this depth
    pub channel_capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                request_timeout_secs: 30,
            },
            redis: RedisConfig {
                enabled: false,
                url: "redis://localhost:6379".to_string(),
            },
            plans: PlansConfig::default(),
            events: EventsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FS__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(
                config::File::with_name(&config_file)
                    .required(false)
            )
            // Override with environment variables (FS__ prefix)
            // e.g., FS__PLANS__DERIVE_ON_MISS=true
            .add_source(
                config::Environment::with_prefix("FS")
                    .separator("__")
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert!(!config.redis.enabled);
        assert!(!config.plans.derive_on_miss);
        assert_eq!(config.events.channel_capacity, 256);
    }

    #[test]
    fn test_optional_sections_default_when_missing() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "server": { "host": "0.0.0.0", "port": 9000, "request_timeout_secs": 5 },
            "redis": { "enabled": true, "url": "redis://cache:6379" }
        }))
        .unwrap();
        assert!(!config.plans.derive_on_miss);
        assert_eq!(config.events.channel_capacity, 256);
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
