//! Callback query handlers module
//!
//! This module contains handlers for the inline keyboard buttons: the main
//! menu entries and the per-station reserve buttons.

pub mod reserve;

use tracing::debug;
use crate::presentation::build_main_menu_choices;
use crate::presentation::messages::{
    ASK_LOCATION_NEARBY, ASK_LOCATION_RESERVE, LOCATION_BUTTON_HINT, MENU, RETURN_ASK_STATION,
};
use crate::state::{AppContext, ConversationState, LocationPurpose, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// "Back to menu", also the fallback for payloads this bot does not know
pub async fn handle_menu(ctx: &AppContext, mut session: UserSession, chat: &dyn ChatTransport) -> Result<()> {
    session.reset();
    ctx.sessions.set(&session).await?;

    chat.send_text_with_choices(MENU, &build_main_menu_choices()).await?;
    Ok(())
}

/// "Nearby" or "Reserve" from the menu: ask for the user's location
pub async fn handle_location_request(
    ctx: &AppContext,
    mut session: UserSession,
    purpose: LocationPurpose,
    chat: &dyn ChatTransport,
) -> Result<()> {
    debug!(user_id = session.user_id, purpose = ?purpose, "Requesting location");

    session.transition(ConversationState::AwaitingLocation { purpose });
    ctx.sessions.set(&session).await?;

    let prompt = match purpose {
        LocationPurpose::Nearby => ASK_LOCATION_NEARBY,
        LocationPurpose::Reserve => ASK_LOCATION_RESERVE,
    };
    chat.send_text(prompt).await?;
    chat.send_text_requesting_location(LOCATION_BUTTON_HINT).await?;

    Ok(())
}

/// "Return" from the menu: start, or restart, the return flow
pub async fn handle_return_start(ctx: &AppContext, mut session: UserSession, chat: &dyn ChatTransport) -> Result<()> {
    if session.state.is_return_flow() {
        debug!(user_id = session.user_id, state = %session.state, "Restarting return flow");
    }

    session.transition(ConversationState::AwaitingReturnStationId);
    ctx.sessions.set(&session).await?;

    chat.send_text(RETURN_ASK_STATION).await?;
    log_user_action(session.user_id, "return_started", None);

    Ok(())
}
