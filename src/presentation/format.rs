//! Station formatting

use crate::models::Station;

/// Maximum number of stations listed in one message
pub const MAX_LISTED_STATIONS: usize = 10;

/// Three-line summary of a station, newline-terminated
pub fn format_station(station: &Station) -> String {
    format!(
        "#{} - {}\n🚲 bikes: {} | 🅿️ docks: {}\n📍 {:.1} m | status: {}\n",
        station.id,
        station.name,
        station.available_bikes,
        station.available_docks,
        station.distance_m,
        station.status.as_deref().unwrap_or("-"),
    )
}

/// Stations in the order given, separated by a blank line
pub fn format_station_list(stations: &[Station]) -> String {
    stations
        .iter()
        .take(MAX_LISTED_STATIONS)
        .map(format_station)
        .collect::<Vec<_>>()
        .join("\n")
}
