//! Error handling for MiBiciBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for MiBiciBot application
#[derive(Error, Debug)]
pub enum MiBiciError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Session store error: {0}")]
    SessionStore(String),
}

/// Rejected user input inside a conversation step.
///
/// These never leave the handler that produced them: the user is re-prompted
/// and the conversation state stays where it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("station id must be a positive integer, got {0:?}")]
    InvalidStationId(String),

    #[error("reservation id must not be blank")]
    BlankReservationId,
}

/// Result type alias for MiBiciBot operations
pub type Result<T> = std::result::Result<T, MiBiciError>;

impl MiBiciError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            MiBiciError::Telegram(_) => true,
            MiBiciError::Config(_) => false,
            MiBiciError::ConfigLoad(_) => false,
            MiBiciError::Redis(_) => true,
            MiBiciError::Http(_) => true,
            MiBiciError::Serialization(_) => false,
            MiBiciError::UrlParse(_) => false,
            MiBiciError::SessionStore(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MiBiciError::Config(_) => ErrorSeverity::Critical,
            MiBiciError::ConfigLoad(_) => ErrorSeverity::Critical,
            MiBiciError::Telegram(_) => ErrorSeverity::Warning,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let err = MiBiciError::Config("Bot token is required".to_string());
        assert!(!err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Configuration error: Bot token is required");
    }

    #[test]
    fn test_session_store_errors_are_recoverable() {
        let err = MiBiciError::SessionStore("connection reset".to_string());
        assert!(err.is_recoverable());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidStationId("abc".to_string());
        assert_eq!(err.to_string(), "station id must be a positive integer, got \"abc\"");
        assert_eq!(ValidationError::BlankReservationId.to_string(), "reservation id must not be blank");
    }
}
