//! Mock stations API server for testing
//!
//! Wraps a wiremock server with helpers for the three endpoints the bot calls.

use std::time::Duration;
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock stations API server
pub struct StationsMockServer {
    pub server: MockServer,
}

impl StationsMockServer {
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// `GET /stations/nearby` answering `items`
    pub async fn mock_nearby(&self, items: Value) {
        Mock::given(method("GET"))
            .and(path("/stations/nearby"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": items })))
            .mount(&self.server)
            .await;
    }

    /// `POST /stations/{id}/reserve` answering `status` + `body`
    pub async fn mock_reserve(&self, station_id: u64, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/stations/{}/reserve", station_id)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `POST /stations/{id}/return` for exactly `expected_calls` calls
    pub async fn mock_return(&self, station_id: u64, body: Value, delay: Option<Duration>, expected_calls: u64) {
        let mut response = ResponseTemplate::new(200).set_body_json(body);
        if let Some(delay) = delay {
            response = response.set_delay(delay);
        }

        Mock::given(method("POST"))
            .and(path(format!("/stations/{}/return", station_id)))
            .respond_with(response)
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// `POST /stations/{id}/return` expecting a specific request body once
    pub async fn mock_return_with_body(&self, station_id: u64, request: Value, body: Value) {
        Mock::given(method("POST"))
            .and(path(format!("/stations/{}/return", station_id)))
            .and(body_json(request))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any `.expect(..)` was not met
    pub async fn verify(&self) {
        self.server.verify().await;
    }
}

/// The single station of the "Centro" fixture
pub fn centro_station() -> Value {
    json!({
        "id": 57,
        "name": "Centro",
        "availableBikes": 3,
        "availableDocks": 2,
        "distance_m": 120.4,
        "status": "active"
    })
}

pub fn reserve_ok_body() -> Value {
    json!({
        "ok": true,
        "reservation": { "id": "abc-123" },
        "inventory": { "available_bikes": 2, "available_docks": 3 }
    })
}

pub fn return_ok_body() -> Value {
    json!({
        "ok": true,
        "reservation": { "id": "abc-123", "status": "returned" },
        "inventory": { "available_bikes": 3, "available_docks": 2 }
    })
}
