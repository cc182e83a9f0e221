//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{MiBiciError, Result};
use super::{Settings, SessionBackend};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_api_config(&settings.api)?;
    validate_session_config(&settings.session)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(MiBiciError::Config(
            "Bot token is required (set TELEGRAM_BOT_TOKEN)".to_string()
        ));
    }

    Ok(())
}

/// Validate stations API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    let url = url::Url::parse(&config.base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(MiBiciError::Config(
            format!("API base URL must be http or https, got {}", url.scheme())
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(MiBiciError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    if config.default_radius == 0 {
        return Err(MiBiciError::Config(
            "Default search radius must be greater than 0".to_string()
        ));
    }

    if config.default_limit == 0 {
        return Err(MiBiciError::Config(
            "Default result limit must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate session storage configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.backend == SessionBackend::Redis && config.redis_url.is_empty() {
        return Err(MiBiciError::Config(
            "Redis URL is required for the redis session backend".to_string()
        ));
    }

    if config.ttl_seconds == 0 {
        return Err(MiBiciError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(MiBiciError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(MiBiciError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.bot.token = "12345:test_token".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let settings = Settings::default();
        assert_matches!(validate_settings(&settings), Err(MiBiciError::Config(_)));
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        let mut settings = valid_settings();
        settings.api.base_url = "not a url".to_string();
        assert_matches!(validate_settings(&settings), Err(MiBiciError::UrlParse(_)));

        settings.api.base_url = "ftp://stations".to_string();
        assert_matches!(validate_settings(&settings), Err(MiBiciError::Config(_)));
    }

    #[test]
    fn test_zero_radius_and_limit_are_rejected() {
        let mut settings = valid_settings();
        settings.api.default_radius = 0;
        assert!(validate_settings(&settings).is_err());

        let mut settings = valid_settings();
        settings.api.default_limit = 0;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_unknown_log_level_is_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
