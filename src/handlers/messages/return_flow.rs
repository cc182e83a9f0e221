//! Two-step bike return flow
//!
//! Step 1 collects the station id, step 2 the reservation id. Invalid input
//! re-prompts without changing state.

use tracing::{debug, info};
use crate::models::ApiResult;
use crate::presentation::build_main_menu_choices;
use crate::presentation::messages::{
    return_confirmed, return_failed, RETURN_ASK_RESERVATION, RETURN_BLANK_RESERVATION, RETURN_INVALID_STATION,
};
use crate::state::validation::{parse_reservation_id, parse_station_id};
use crate::state::{AppContext, ConversationState, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Step 1: text received while waiting for the station id
pub async fn handle_station_id_input(
    ctx: &AppContext,
    mut session: UserSession,
    text: &str,
    chat: &dyn ChatTransport,
) -> Result<()> {
    let station_id = match parse_station_id(text) {
        Ok(id) => id,
        Err(e) => {
            debug!(user_id = session.user_id, error = %e, "Rejected station id");
            chat.send_text(RETURN_INVALID_STATION).await?;
            return Ok(());
        }
    };

    session.transition(ConversationState::AwaitingReturnReservationId { station_id });
    ctx.sessions.set(&session).await?;

    chat.send_text(RETURN_ASK_RESERVATION).await?;
    Ok(())
}

/// Step 2: text received while waiting for the reservation id.
///
/// The session only returns to idle if it is unchanged since before the
/// remote call; a flow the user started meanwhile is kept.
pub async fn handle_reservation_id_input(
    ctx: &AppContext,
    mut session: UserSession,
    station_id: u64,
    text: &str,
    chat: &dyn ChatTransport,
) -> Result<()> {
    let user_id = session.user_id;
    let reservation_id = match parse_reservation_id(text) {
        Ok(id) => id,
        Err(e) => {
            debug!(user_id = user_id, error = %e, "Rejected reservation id");
            chat.send_text(RETURN_BLANK_RESERVATION).await?;
            return Ok(());
        }
    };

    let snapshot = session.clone();
    let outcome = ctx.stations_api().return_bike(station_id, user_id, reservation_id).await;

    match ctx.sessions.get(user_id).await? {
        Some(current) if current != snapshot => {
            debug!(user_id = user_id, state = %current.state, "Session moved on during return call, keeping it");
        }
        _ => {
            session.reset();
            ctx.sessions.set(&session).await?;
        }
    }

    let text = match &outcome {
        ApiResult::Success(receipt) => {
            info!(user_id = user_id, station_id = station_id, reservation_id = %receipt.reservation.id, "Bike returned");
            log_user_action(user_id, "return", Some(&receipt.reservation.id));
            return_confirmed(station_id, receipt)
        }
        ApiResult::Failure(failure) => return_failed(&failure.error_code),
    };

    chat.send_text_with_choices(&text, &build_main_menu_choices()).await?;
    Ok(())
}
