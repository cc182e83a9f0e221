//! Station model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A dock location as reported by the stations API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: u64,
    pub name: String,
    #[serde(default, alias = "availableBikes")]
    pub available_bikes: u32,
    #[serde(default, alias = "availableDocks")]
    pub available_docks: u32,
    #[serde(default, alias = "distanceMeters")]
    pub distance_m: f64,
    /// Free-form status; non-string values are kept as their JSON text
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: Option<String>,
}

fn lenient_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Body of `GET /stations/nearby`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyStationsResponse {
    #[serde(default)]
    pub items: Vec<Station>,
}

/// Query for a nearby-stations search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius_m: u32,
    pub limit: u32,
    pub only_available: bool,
}
