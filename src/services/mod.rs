//! Services module
//!
//! This module contains the clients for external services

pub mod stations;

pub use stations::StationsApiClient;

use crate::config::settings::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone, Debug)]
pub struct ServiceFactory {
    pub stations_api: StationsApiClient,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let stations_api = StationsApiClient::new(&settings.api)?;

        Ok(Self { stations_api })
    }
}
