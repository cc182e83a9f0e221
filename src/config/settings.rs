//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Plain environment variables understood in addition to `MIBICI__*` keys.
const PLAIN_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("TELEGRAM_BOT_TOKEN", "bot.token"),
    ("API_BASE_URL", "api.base_url"),
    ("DEFAULT_RADIUS", "api.default_radius"),
    ("DEFAULT_LIMIT", "api.default_limit"),
];

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
}

/// Remote stations API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Search radius for nearby stations, in meters
    pub default_radius: u32,
    /// Maximum number of stations requested per search
    pub default_limit: u32,
}

/// Where conversation sessions are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackend {
    Memory,
    Redis,
}

/// Session storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub redis_url: String,
    pub prefix: String,
    pub ttl_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and the process environment
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    /// Load settings from the optional `config` file and the given variables
    pub fn from_env_map(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("api.base_url", defaults.api.base_url)?
            .set_default("api.timeout_seconds", defaults.api.timeout_seconds)?
            .set_default("api.default_radius", defaults.api.default_radius)?
            .set_default("api.default_limit", defaults.api.default_limit)?
            .set_default("session.backend", "memory")?
            .set_default("session.redis_url", defaults.session.redis_url)?
            .set_default("session.prefix", defaults.session.prefix)?
            .set_default("session.ttl_seconds", defaults.session.ttl_seconds)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("MIBICI")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            );

        for (var, key) in PLAIN_ENV_OVERRIDES {
            builder = builder.set_override_option(key, vars.get(var).cloned())?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::MiBiciError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
            },
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeout_seconds: 20,
                default_radius: 1200,
                default_limit: 5,
            },
            session: SessionConfig {
                backend: SessionBackend::Memory,
                redis_url: "redis://localhost:6379".to_string(),
                prefix: "mibici:".to_string(),
                ttl_seconds: 3600,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
