//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod api;
pub mod reservation;
pub mod station;

// Re-export commonly used models
pub use api::{ApiFailure, ApiResult};
pub use reservation::{Inventory, Reservation, ReservationReceipt, ReturnReceipt};
pub use station::{NearbyQuery, Station};
