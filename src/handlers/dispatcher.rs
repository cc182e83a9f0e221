//! Event dispatcher
//!
//! Routes each inbound event, combined with the sender's conversation state,
//! to one handler. The dispatcher holds no conversation state itself.

use std::panic::AssertUnwindSafe;
use futures::FutureExt;
use tracing::{debug, error, warn};
use crate::presentation::{build_main_menu_choices, CallbackAction};
use crate::presentation::messages::UNEXPECTED_ERROR;
use crate::state::{AppContext, ConversationState, LocationPurpose, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;
use super::{callbacks, commands, messages, InboundEvent};

/// What the dispatcher did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler ran to completion
    Handled,
    /// No handler applies in the current state; nothing was sent
    Ignored,
    /// The handler failed or panicked and a generic error reply was sent
    Failed,
}

/// Routes events to the conversation handlers
#[derive(Clone, Debug)]
pub struct EventDispatcher {
    ctx: AppContext,
}

impl EventDispatcher {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    /// Process one event to completion.
    ///
    /// Errors and panics are contained here: the user gets a generic error
    /// reply and their session is cleared, other users are unaffected.
    pub async fn dispatch(&self, user_id: i64, event: InboundEvent, chat: &dyn ChatTransport) -> DispatchOutcome {
        debug!(user_id = user_id, event = ?event, "Dispatching event");

        match AssertUnwindSafe(self.route(user_id, event, chat)).catch_unwind().await {
            Ok(Ok(handled)) => {
                if handled {
                    DispatchOutcome::Handled
                } else {
                    DispatchOutcome::Ignored
                }
            }
            Ok(Err(e)) => {
                error!(user_id = user_id, error = %e, severity = %e.severity(), recoverable = e.is_recoverable(), "Error handling event");
                self.recover(user_id, chat).await;
                DispatchOutcome::Failed
            }
            Err(_) => {
                error!(user_id = user_id, "Handler panicked");
                self.recover(user_id, chat).await;
                DispatchOutcome::Failed
            }
        }
    }

    /// Returns `Ok(false)` when the event is not routable in the current state
    async fn route(&self, user_id: i64, event: InboundEvent, chat: &dyn ChatTransport) -> Result<bool> {
        let ctx = &self.ctx;
        let session = ctx.sessions.get_or_create(user_id).await?;

        match event {
            InboundEvent::Start => commands::start::handle_start(ctx, session, chat).await?,
            InboundEvent::Help => commands::help::handle_help(chat).await?,
            InboundEvent::Cancel => {
                if !session.state.is_return_flow() {
                    return Ok(ignore(&session, "cancel"));
                }
                commands::cancel::handle_cancel(ctx, session, chat).await?
            }
            InboundEvent::ButtonChoice(payload) => match CallbackAction::parse(&payload) {
                Some(CallbackAction::Menu) => callbacks::handle_menu(ctx, session, chat).await?,
                Some(CallbackAction::Nearby) => {
                    callbacks::handle_location_request(ctx, session, LocationPurpose::Nearby, chat).await?
                }
                Some(CallbackAction::Reserve) => {
                    callbacks::handle_location_request(ctx, session, LocationPurpose::Reserve, chat).await?
                }
                Some(CallbackAction::Return) => callbacks::handle_return_start(ctx, session, chat).await?,
                Some(CallbackAction::ReserveStation(station_id)) => {
                    callbacks::reserve::handle_reserve_station(ctx, session, station_id, chat).await?
                }
                None => {
                    warn!(user_id = user_id, payload = %payload, "Unknown callback payload, showing menu");
                    callbacks::handle_menu(ctx, session, chat).await?
                }
            },
            InboundEvent::LocationShared { lat, lon } => match session.state {
                ConversationState::AwaitingLocation { purpose } => {
                    messages::handle_location(ctx, session, purpose, lat, lon, chat).await?
                }
                _ => return Ok(ignore(&session, "location")),
            },
            InboundEvent::TextMessage(text) => match session.state {
                ConversationState::AwaitingReturnStationId => {
                    messages::return_flow::handle_station_id_input(ctx, session, &text, chat).await?
                }
                ConversationState::AwaitingReturnReservationId { station_id } => {
                    messages::return_flow::handle_reservation_id_input(ctx, session, station_id, &text, chat).await?
                }
                _ => return Ok(ignore(&session, "text")),
            },
        }

        Ok(true)
    }

    async fn recover(&self, user_id: i64, chat: &dyn ChatTransport) {
        if let Err(e) = self.ctx.sessions.clear(user_id).await {
            warn!(user_id = user_id, error = %e, "Failed to clear session after error");
        }
        if let Err(e) = chat.send_text_with_choices(UNEXPECTED_ERROR, &build_main_menu_choices()).await {
            warn!(user_id = user_id, error = %e, "Failed to send error reply");
        }
    }
}

fn ignore(session: &UserSession, kind: &str) -> bool {
    debug!(user_id = session.user_id, state = %session.state, kind = kind, "Ignoring unroutable event");
    false
}
