//! User-facing copy

use crate::models::{ReservationReceipt, ReturnReceipt, Station};
use super::format::format_station_list;

pub const WELCOME: &str = "🚲 MiBici Bot\nElige una opción:";
pub const MENU: &str = "Menú:";
pub const ASK_LOCATION_NEARBY: &str = "Compárteme tu ubicación 📍";
pub const ASK_LOCATION_RESERVE: &str = "Para reservar, primero compárteme tu ubicación 📍";
pub const LOCATION_BUTTON_HINT: &str = "Toca el botón:";
pub const LOCATION_BUTTON: &str = "📍 Enviar ubicación";
pub const SEARCHING: &str = "Buscando estaciones cercanas...";
pub const RETURN_ASK_STATION: &str =
    "↩️ Regresar bici\n\nPaso 1/2: Envíame el stationId donde vas a regresar (ej. 57).";
pub const RETURN_INVALID_STATION: &str = "stationId inválido. Envíame un número entero (ej. 57).";
pub const RETURN_ASK_RESERVATION: &str =
    "Paso 2/2: Envíame el reservationId (UUID) que te regresó el endpoint /reserve.";
pub const RETURN_BLANK_RESERVATION: &str = "reservationId vacío. Pégalo tal cual.";
pub const CANCELLED: &str = "Cancelado.\n\nMenú:";
pub const UNEXPECTED_ERROR: &str = "⚠️ Ocurrió un error inesperado. Intenta de nuevo.\n\nMenú:";
pub const HELP: &str = "🚲 MiBici Bot\n\n\
    /start - Mostrar el menú principal\n\
    /cancel - Cancelar el regreso de bici en curso\n\
    /help - Mostrar esta ayuda";

pub fn no_stations_found(radius_m: u32) -> String {
    format!("No encontré estaciones con bicis disponibles en {}m.\n\nMenú:", radius_m)
}

pub fn nearby_search_failed(error_code: &str) -> String {
    format!("⚠️ No se pudo buscar estaciones: {}\n\nMenú:", error_code)
}

pub fn nearby_stations(stations: &[Station]) -> String {
    format!("Estas son las más cercanas:\n\n{}", format_station_list(stations))
}

pub fn reservation_confirmed(station_id: u64, receipt: &ReservationReceipt) -> String {
    format!(
        "✅ Reservada en estación #{}\n\
         reservationId:\n{}\n\n\
         Inventario ahora: bikes={} docks={}\n\n\
         ⚠️ Guarda tu reservationId, lo necesitarás para regresar.\n\nMenú:",
        station_id,
        receipt.reservation_id,
        receipt.inventory.available_bikes,
        receipt.inventory.available_docks,
    )
}

pub fn reservation_failed(error_code: &str) -> String {
    format!("⚠️ No se pudo reservar: {}\n\nMenú:", error_code)
}

pub fn return_confirmed(station_id: u64, receipt: &ReturnReceipt) -> String {
    format!(
        "✅ Bici devuelta en estación #{}\n\
         Reserva: {} status={}\n\
         Inventario ahora: bikes={} docks={}\n\nMenú:",
        station_id,
        receipt.reservation.id,
        receipt.reservation.status.as_deref().unwrap_or("-"),
        receipt.inventory.available_bikes,
        receipt.inventory.available_docks,
    )
}

pub fn return_failed(error_code: &str) -> String {
    format!("⚠️ No se pudo regresar: {}\n\nMenú:", error_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Inventory, Reservation};

    #[test]
    fn test_reservation_confirmed_shows_id_and_inventory() {
        let receipt = ReservationReceipt {
            reservation_id: "abc-123".to_string(),
            inventory: Inventory { available_bikes: 2, available_docks: 3 },
        };
        let text = reservation_confirmed(57, &receipt);
        assert!(text.contains("estación #57"));
        assert!(text.contains("abc-123"));
        assert!(text.contains("bikes=2 docks=3"));
    }

    #[test]
    fn test_return_confirmed_without_status() {
        let receipt = ReturnReceipt {
            reservation: Reservation { id: "abc-123".to_string(), status: None },
            inventory: Inventory { available_bikes: 3, available_docks: 2 },
        };
        let text = return_confirmed(57, &receipt);
        assert!(text.contains("Bici devuelta en estación #57"));
        assert!(text.contains("Reserva: abc-123 status=-"));
    }

    #[test]
    fn test_failures_name_the_code() {
        assert!(reservation_failed("NO_BIKES").starts_with("⚠️ No se pudo reservar: NO_BIKES"));
        assert!(return_failed("TIMEOUT").contains("No se pudo regresar: TIMEOUT"));
        assert!(no_stations_found(1200).contains("1200m"));
    }
}
