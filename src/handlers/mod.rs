//! Bot handlers module
//!
//! This module contains the conversation handlers organized by event type:
//! - Command handlers for /start, /cancel and /help
//! - Callback handlers for inline keyboard choices
//! - Message handlers for locations and free text
//!
//! and the [`EventDispatcher`] that picks one of them for each event.

pub mod callbacks;
pub mod commands;
pub mod dispatcher;
pub mod messages;

pub use dispatcher::{DispatchOutcome, EventDispatcher};

/// Transport-independent inbound event
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    Start,
    Cancel,
    Help,
    ButtonChoice(String),
    LocationShared { lat: f64, lon: f64 },
    TextMessage(String),
}
