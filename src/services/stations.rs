//! Stations API client
//!
//! Typed wrapper over the remote bike-share service. Every call resolves to an
//! [`ApiResult`]; timeouts, connection errors, non-2xx statuses and malformed
//! bodies all become [`ApiFailure`] values instead of errors.

use std::time::Duration;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use crate::config::ApiConfig;
use crate::models::api::{ApiFailure, ApiResult, UNKNOWN_ERROR};
use crate::models::reservation::{
    ReservationReceipt, ReserveRequest, ReturnReceipt, ReturnRequest, StationActionResponse,
};
use crate::models::station::{NearbyQuery, NearbyStationsResponse, Station};
use crate::utils::errors::{MiBiciError, Result};
use crate::utils::logging::log_api_failure;

/// Client for the stations/reservations HTTP API
#[derive(Clone, Debug)]
pub struct StationsApiClient {
    client: Client,
    base_url: String,
}

impl StationsApiClient {
    /// Create a new client; requests are bounded by `config.timeout_seconds`
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("MiBiciBot/1.0")
            .build()
            .map_err(MiBiciError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Search stations around a point, nearest first as ordered by the service
    pub async fn fetch_nearby_stations(&self, query: NearbyQuery) -> ApiResult<Vec<Station>> {
        let url = self.url("/stations/nearby");
        debug!(lat = query.lat, lon = query.lon, radius = query.radius_m, limit = query.limit, "Fetching nearby stations");

        let request = self.client.get(&url).query(&[
            ("lat", query.lat.to_string()),
            ("lon", query.lon.to_string()),
            ("radius", query.radius_m.to_string()),
            ("limit", query.limit.to_string()),
            ("onlyAvailable", query.only_available.to_string()),
        ]);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return transport_failure("fetch_nearby_stations", e),
        };

        let status = response.status();
        if !status.is_success() {
            let failure = ApiFailure::http(status.as_u16(), error_code_from_body(response).await);
            log_api_failure("fetch_nearby_stations", failure.http_status, &failure.error_code);
            return ApiResult::Failure(failure);
        }

        match decode_json::<NearbyStationsResponse>(response).await {
            Ok(mut body) => {
                body.items.truncate(query.limit as usize);
                debug!(count = body.items.len(), "Nearby stations received");
                ApiResult::Success(body.items)
            }
            Err(failure) => {
                log_api_failure("fetch_nearby_stations", failure.http_status, &failure.error_code);
                ApiResult::Failure(failure)
            }
        }
    }

    /// Reserve one bike at `station_id` on behalf of `user_id`
    pub async fn reserve_bike(&self, station_id: u64, user_id: i64) -> ApiResult<ReservationReceipt> {
        let url = self.url(&format!("/stations/{}/reserve", station_id));
        let body = ReserveRequest { user_id: user_id.to_string() };

        info!(station_id = station_id, user_id = user_id, "Reserving bike");
        let (status, envelope) = match self.post_action(&url, &body, "reserve_bike").await {
            Ok(parts) => parts,
            Err(failure) => return ApiResult::Failure(failure),
        };

        let result = match accepted(status, &envelope) {
            Err(failure) => ApiResult::Failure(failure),
            Ok(()) => match (envelope.reservation, envelope.inventory) {
                (Some(reservation), Some(inventory)) => ApiResult::Success(ReservationReceipt {
                    reservation_id: reservation.id,
                    inventory,
                }),
                _ => ApiResult::Failure(ApiFailure::invalid_response(status)),
            },
        };

        if let ApiResult::Failure(failure) = &result {
            log_api_failure("reserve_bike", failure.http_status, &failure.error_code);
        }
        result
    }

    /// Return the bike held under `reservation_id` to `station_id`
    pub async fn return_bike(&self, station_id: u64, user_id: i64, reservation_id: &str) -> ApiResult<ReturnReceipt> {
        let url = self.url(&format!("/stations/{}/return", station_id));
        let body = ReturnRequest {
            user_id: user_id.to_string(),
            reservation_id: reservation_id.to_string(),
        };

        info!(station_id = station_id, user_id = user_id, reservation_id = reservation_id, "Returning bike");
        let (status, envelope) = match self.post_action(&url, &body, "return_bike").await {
            Ok(parts) => parts,
            Err(failure) => return ApiResult::Failure(failure),
        };

        let result = match accepted(status, &envelope) {
            Err(failure) => ApiResult::Failure(failure),
            Ok(()) => match (envelope.reservation, envelope.inventory) {
                (Some(reservation), Some(inventory)) => ApiResult::Success(ReturnReceipt { reservation, inventory }),
                _ => ApiResult::Failure(ApiFailure::invalid_response(status)),
            },
        };

        if let ApiResult::Failure(failure) = &result {
            log_api_failure("return_bike", failure.http_status, &failure.error_code);
        }
        result
    }

    /// POST a JSON body and read the shared reserve/return envelope.
    ///
    /// A body that is not JSON is replaced by an envelope carrying only the
    /// generic error code, so the status can still be reported.
    async fn post_action<B: serde::Serialize>(
        &self,
        url: &str,
        body: &B,
        operation: &str,
    ) -> std::result::Result<(u16, StationActionResponse), ApiFailure> {
        let response = match self.client.post(url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                let failure = classify_transport_error(&e);
                log_api_failure(operation, None, &failure.error_code);
                return Err(failure);
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                let failure = classify_transport_error(&e);
                log_api_failure(operation, Some(status), &failure.error_code);
                return Err(failure);
            }
        };

        let envelope = serde_json::from_str::<StationActionResponse>(&text).unwrap_or_else(|e| {
            debug!(status = status, error = %e, body = %text, "Non-JSON body from stations API");
            StationActionResponse {
                error: Some(UNKNOWN_ERROR.to_string()),
                ..StationActionResponse::default()
            }
        });

        Ok((status, envelope))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A reserve/return call succeeded only on 2xx with `ok: true`
fn accepted(status: u16, envelope: &StationActionResponse) -> std::result::Result<(), ApiFailure> {
    if (200..300).contains(&status) && envelope.ok == Some(true) {
        return Ok(());
    }

    let code = envelope.error.clone().unwrap_or_else(|| UNKNOWN_ERROR.to_string());
    Err(ApiFailure::http(status, code))
}

fn classify_transport_error(error: &reqwest::Error) -> ApiFailure {
    if error.is_timeout() {
        ApiFailure::timeout()
    } else {
        ApiFailure::network()
    }
}

fn transport_failure<T>(operation: &str, error: reqwest::Error) -> ApiResult<T> {
    let failure = classify_transport_error(&error);
    debug!(error = %error, "Stations API transport error");
    log_api_failure(operation, None, &failure.error_code);
    ApiResult::Failure(failure)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> std::result::Result<T, ApiFailure> {
    let status = response.status().as_u16();
    let text = response.text().await.map_err(|e| classify_transport_error(&e))?;
    serde_json::from_str(&text).map_err(|e| {
        debug!(status = status, error = %e, "Malformed stations API body");
        ApiFailure::invalid_response(status)
    })
}

async fn error_code_from_body(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<StationActionResponse>(&text)
        .ok()
        .and_then(|body| body.error)
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> StationActionResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_accepted_requires_ok_flag() {
        assert!(accepted(200, &envelope(r#"{"ok": true}"#)).is_ok());
        assert_eq!(
            accepted(200, &envelope(r#"{"ok": false, "error": "EXPIRED"}"#)),
            Err(ApiFailure::http(200, "EXPIRED"))
        );
    }

    #[test]
    fn test_accepted_rejects_non_2xx_even_with_ok() {
        assert_eq!(
            accepted(409, &envelope(r#"{"ok": true}"#)),
            Err(ApiFailure::http(409, UNKNOWN_ERROR))
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:3000/".to_string(),
            timeout_seconds: 20,
            default_radius: 1200,
            default_limit: 5,
        };
        let client = StationsApiClient::new(&config).unwrap();
        assert_eq!(client.url("/stations/nearby"), "http://localhost:3000/stations/nearby");
    }
}
