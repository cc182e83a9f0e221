//! Application context shared by all handlers

use std::sync::Arc;
use crate::config::Settings;
use crate::models::NearbyQuery;
use crate::services::{ServiceFactory, StationsApiClient};
use crate::utils::errors::Result;
use super::storage::{create_session_store, SessionStore};

/// Services, session store and settings handed to every handler
#[derive(Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub services: ServiceFactory,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppContext {
    pub fn new(settings: Settings, services: ServiceFactory, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            settings,
            services,
            sessions,
        }
    }

    /// Build services and the configured session store from settings
    pub async fn from_settings(settings: Settings) -> Result<Self> {
        let services = ServiceFactory::new(&settings)?;
        let sessions = create_session_store(&settings.session).await?;
        Ok(Self::new(settings, services, sessions))
    }

    pub fn stations_api(&self) -> &StationsApiClient {
        &self.services.stations_api
    }

    /// Nearby search around a point using the configured radius and limit
    pub fn nearby_query(&self, lat: f64, lon: f64) -> NearbyQuery {
        NearbyQuery {
            lat,
            lon,
            radius_m: self.settings.api.default_radius,
            limit: self.settings.api.default_limit,
            only_available: true,
        }
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("settings", &self.settings)
            .field("services", &self.services)
            .finish_non_exhaustive()
    }
}
