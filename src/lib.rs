//! MiBiciBot Telegram Bot
//!
//! A conversational front-end for a bike-share service. Users find nearby
//! stations, reserve a bike and return it through chat; inventory and
//! reservation rules live in the remote stations API.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod models;
pub mod presentation;
pub mod services;
pub mod state;
pub mod transport;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{MiBiciError, Result};

// Re-export main components for easy access
pub use handlers::{EventDispatcher, InboundEvent};
pub use services::{ServiceFactory, StationsApiClient};
pub use state::{AppContext, SessionStore};
pub use transport::ChatTransport;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
