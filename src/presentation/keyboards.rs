//! Choice sets rendered as inline keyboards
//!
//! Choices carry an opaque payload back to the dispatcher. The payload grammar
//! is owned by [`CallbackAction`].

use crate::models::Station;

/// Maximum number of station choices offered at once
pub const MAX_STATION_CHOICES: usize = 10;

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub payload: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, action: CallbackAction) -> Self {
        Self {
            label: label.into(),
            payload: action.to_payload(),
        }
    }
}

/// Rows of choices, one row per button line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    pub rows: Vec<Vec<Choice>>,
}

impl ChoiceSet {
    /// One choice per row
    pub fn single_column(choices: Vec<Choice>) -> Self {
        Self {
            rows: choices.into_iter().map(|c| vec![c]).collect(),
        }
    }

    pub fn choices(&self) -> impl Iterator<Item = &Choice> {
        self.rows.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.choices().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.is_empty())
    }

    /// Find the choice carrying `payload`
    pub fn find(&self, payload: &str) -> Option<&Choice> {
        self.choices().find(|c| c.payload == payload)
    }
}

/// Button payloads understood by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Nearby,
    Reserve,
    Return,
    Menu,
    ReserveStation(u64),
}

impl CallbackAction {
    pub fn to_payload(self) -> String {
        match self {
            CallbackAction::Nearby => "NEARBY".to_string(),
            CallbackAction::Reserve => "RESERVE".to_string(),
            CallbackAction::Return => "RETURN".to_string(),
            CallbackAction::Menu => "MENU".to_string(),
            CallbackAction::ReserveStation(id) => format!("RESERVE:{}", id),
        }
    }

    /// Parse a payload; `None` for anything this bot did not produce
    pub fn parse(payload: &str) -> Option<Self> {
        match payload {
            "NEARBY" => Some(CallbackAction::Nearby),
            "RESERVE" => Some(CallbackAction::Reserve),
            "RETURN" => Some(CallbackAction::Return),
            "MENU" => Some(CallbackAction::Menu),
            other => {
                let id = other.strip_prefix("RESERVE:")?;
                if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                id.parse::<u64>().ok().map(CallbackAction::ReserveStation)
            }
        }
    }
}

/// The fixed three-option main menu
pub fn build_main_menu_choices() -> ChoiceSet {
    ChoiceSet::single_column(vec![
        Choice::new("📍 Ver estaciones cercanas", CallbackAction::Nearby),
        Choice::new("🚲 Reservar bici (desde cercanas)", CallbackAction::Reserve),
        Choice::new("↩️ Regresar bici", CallbackAction::Return),
    ])
}

/// One reserve choice per station (capped) followed by a back-to-menu choice
pub fn build_station_choices(stations: &[Station]) -> ChoiceSet {
    let mut choices: Vec<Choice> = stations
        .iter()
        .take(MAX_STATION_CHOICES)
        .map(|s| {
            Choice::new(
                format!("Reservar #{} (🚲{})", s.id, s.available_bikes),
                CallbackAction::ReserveStation(s.id),
            )
        })
        .collect();
    choices.push(Choice::new("⬅️ Menú", CallbackAction::Menu));

    ChoiceSet::single_column(choices)
}
