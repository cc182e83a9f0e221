//! Reserve button handler

use tracing::info;
use crate::models::ApiResult;
use crate::presentation::build_main_menu_choices;
use crate::presentation::messages::{reservation_confirmed, reservation_failed};
use crate::state::{AppContext, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// "Reservar #N": reserve a bike at station N, accepted in any state
pub async fn handle_reserve_station(
    ctx: &AppContext,
    mut session: UserSession,
    station_id: u64,
    chat: &dyn ChatTransport,
) -> Result<()> {
    let user_id = session.user_id;
    let outcome = ctx.stations_api().reserve_bike(station_id, user_id).await;

    session.reset();
    ctx.sessions.set(&session).await?;

    let text = match &outcome {
        ApiResult::Success(receipt) => {
            info!(user_id = user_id, station_id = station_id, reservation_id = %receipt.reservation_id, "Bike reserved");
            log_user_action(user_id, "reserve", Some(&receipt.reservation_id));
            reservation_confirmed(station_id, receipt)
        }
        ApiResult::Failure(failure) => reservation_failed(&failure.error_code),
    };

    chat.send_text_with_choices(&text, &build_main_menu_choices()).await?;
    Ok(())
}
