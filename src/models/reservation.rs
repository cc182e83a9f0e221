//! Reservation and inventory models

use serde::{Deserialize, Serialize};

/// Bike/dock counts of a station after a reserve or return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(alias = "availableBikes")]
    pub available_bikes: u32,
    #[serde(alias = "availableDocks")]
    pub available_docks: u32,
}

/// A claim on one bike, identified by an opaque id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Successful outcome of `POST /stations/{id}/reserve`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationReceipt {
    pub reservation_id: String,
    pub inventory: Inventory,
}

/// Successful outcome of `POST /stations/{id}/return`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub reservation: Reservation,
    pub inventory: Inventory,
}

/// Wire body shared by the reserve and return endpoints.
///
/// Success and error bodies use the same envelope; which fields are present
/// depends on `ok`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StationActionResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub reservation: Option<Reservation>,
    #[serde(default)]
    pub inventory: Option<Inventory>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /stations/{id}/reserve`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub user_id: String,
}

/// Body of `POST /stations/{id}/return`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequest {
    pub user_id: String,
    pub reservation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_bodies_use_camel_case() {
        let body = serde_json::to_value(ReturnRequest {
            user_id: "42".to_string(),
            reservation_id: "abc-123".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"userId": "42", "reservationId": "abc-123"}));
    }

    #[test]
    fn test_error_envelope_parses() {
        let response: StationActionResponse = serde_json::from_str(r#"{"error": "NO_BIKES"}"#).unwrap();
        assert_eq!(response.ok, None);
        assert_eq!(response.error.as_deref(), Some("NO_BIKES"));
        assert!(response.reservation.is_none());
    }
}
