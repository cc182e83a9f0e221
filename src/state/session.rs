//! Per-user conversation session
//!
//! A session records where a user is in the conversation. The return flow
//! keeps its collected station id inside the state variant itself, so a state
//! can never be reached without the data it needs.

use std::fmt;
use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::utils::logging::log_state_transition;

/// Why the bot asked for the user's location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationPurpose {
    Nearby,
    Reserve,
}

/// Conversation state of one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    Idle,
    AwaitingLocation { purpose: LocationPurpose },
    AwaitingReturnStationId,
    AwaitingReturnReservationId { station_id: u64 },
}

impl ConversationState {
    pub fn name(&self) -> &'static str {
        match self {
            ConversationState::Idle => "IDLE",
            ConversationState::AwaitingLocation { .. } => "AWAITING_LOCATION",
            ConversationState::AwaitingReturnStationId => "AWAITING_RETURN_STATION_ID",
            ConversationState::AwaitingReturnReservationId { .. } => "AWAITING_RETURN_RESERVATION_ID",
        }
    }

    /// Whether the multi-step return flow is in progress
    pub fn is_return_flow(&self) -> bool {
        matches!(
            self,
            ConversationState::AwaitingReturnStationId | ConversationState::AwaitingReturnReservationId { .. }
        )
    }
}

impl fmt::Display for ConversationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversationState::AwaitingLocation { purpose } => write!(f, "{}({:?})", self.name(), purpose),
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Transient conversation session of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSession {
    pub user_id: i64,
    pub state: ConversationState,
    pub updated_at: DateTime<Utc>,
}

impl UserSession {
    /// Create an idle session for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            state: ConversationState::Idle,
            updated_at: Utc::now(),
        }
    }

    /// Move to `next`, logging the change
    pub fn transition(&mut self, next: ConversationState) {
        if self.state != next {
            log_state_transition(self.user_id, &self.state.to_string(), &next.to_string());
        }
        self.state = next;
        self.updated_at = Utc::now();
    }

    /// Drop any flow data and return to idle
    pub fn reset(&mut self) {
        self.transition(ConversationState::Idle);
    }

    pub fn is_idle(&self) -> bool {
        self.state == ConversationState::Idle
    }

    pub fn pending_location_purpose(&self) -> Option<LocationPurpose> {
        match self.state {
            ConversationState::AwaitingLocation { purpose } => Some(purpose),
            _ => None,
        }
    }

    pub fn pending_return_station_id(&self) -> Option<u64> {
        match self.state {
            ConversationState::AwaitingReturnReservationId { station_id } => Some(station_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = UserSession::new(42);
        assert!(session.is_idle());
        assert_eq!(session.pending_location_purpose(), None);
        assert_eq!(session.pending_return_station_id(), None);
    }

    #[test]
    fn test_accessors_follow_state() {
        let mut session = UserSession::new(42);
        session.transition(ConversationState::AwaitingLocation { purpose: LocationPurpose::Reserve });
        assert_eq!(session.pending_location_purpose(), Some(LocationPurpose::Reserve));

        session.transition(ConversationState::AwaitingReturnReservationId { station_id: 57 });
        assert_eq!(session.pending_location_purpose(), None);
        assert_eq!(session.pending_return_station_id(), Some(57));
        assert!(session.state.is_return_flow());

        session.reset();
        assert!(session.is_idle());
        assert_eq!(session.pending_return_station_id(), None);
    }

    #[test]
    fn test_state_serialization_is_tagged() {
        let state = ConversationState::AwaitingReturnReservationId { station_id: 57 };
        let json = serde_json::to_value(state).unwrap();
        assert_eq!(json, serde_json::json!({"state": "awaiting_return_reservation_id", "station_id": 57}));

        let purpose = serde_json::to_value(ConversationState::AwaitingLocation { purpose: LocationPurpose::Nearby }).unwrap();
        assert_eq!(purpose, serde_json::json!({"state": "awaiting_location", "purpose": "NEARBY"}));
    }

    #[test]
    fn test_display_includes_purpose() {
        let state = ConversationState::AwaitingLocation { purpose: LocationPurpose::Nearby };
        assert_eq!(state.to_string(), "AWAITING_LOCATION(Nearby)");
        assert_eq!(ConversationState::Idle.to_string(), "IDLE");
    }
}
