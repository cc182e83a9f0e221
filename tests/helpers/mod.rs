//! Test helpers module
//!
//! Builds a dispatcher wired to an in-memory session store and a mock
//! stations API, plus a transport that records replies.

#![allow(dead_code)]

pub mod recording_transport;
pub mod stations_mock;

pub use recording_transport::*;
pub use stations_mock::*;

use std::sync::Arc;
use MiBiciBot::{
    config::Settings,
    handlers::{EventDispatcher, InboundEvent},
    services::ServiceFactory,
    state::{AppContext, ConversationState, InMemorySessionStore, SessionStore},
};

pub const TEST_USER: i64 = 987654321;

/// Settings pointing at `api_url`
pub fn test_settings(api_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.bot.token = "12345:test_token".to_string();
    settings.api.base_url = api_url.to_string();
    settings.api.timeout_seconds = 2;
    settings
}

/// Dispatcher plus handles to its session store
pub struct TestBot {
    pub dispatcher: EventDispatcher,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestBot {
    pub fn new(api_url: &str) -> Self {
        Self::with_store(api_url, Arc::new(InMemorySessionStore::new()))
    }

    pub fn with_store(api_url: &str, sessions: Arc<InMemorySessionStore>) -> Self {
        let settings = test_settings(api_url);
        let services = ServiceFactory::new(&settings).expect("Failed to create services");
        let store: Arc<dyn SessionStore> = sessions.clone();
        let dispatcher = EventDispatcher::new(AppContext::new(settings, services, store));

        Self { dispatcher, sessions }
    }

    /// Bot whose API is never reachable; for flows that make no remote call
    pub fn offline() -> Self {
        Self::new("http://127.0.0.1:9")
    }

    pub async fn send(&self, user_id: i64, event: InboundEvent, chat: &RecordingTransport) -> MiBiciBot::handlers::DispatchOutcome {
        self.dispatcher.dispatch(user_id, event, chat).await
    }

    pub async fn tap(&self, user_id: i64, payload: &str, chat: &RecordingTransport) {
        self.send(user_id, InboundEvent::ButtonChoice(payload.to_string()), chat).await;
    }

    pub async fn text(&self, user_id: i64, text: &str, chat: &RecordingTransport) {
        self.send(user_id, InboundEvent::TextMessage(text.to_string()), chat).await;
    }

    pub async fn state(&self, user_id: i64) -> ConversationState {
        self.sessions
            .get(user_id)
            .await
            .expect("in-memory store never fails")
            .map(|s| s.state)
            .unwrap_or_default()
    }
}
