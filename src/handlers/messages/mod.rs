//! Message handlers module
//!
//! Handles shared locations and the free-text replies of the return flow

pub mod return_flow;

use tracing::{debug, info};
use crate::models::ApiResult;
use crate::presentation::{build_main_menu_choices, build_station_choices};
use crate::presentation::messages::{nearby_search_failed, nearby_stations, no_stations_found, SEARCHING};
use crate::state::{AppContext, LocationPurpose, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;

/// Location received while one was requested: list nearby stations.
///
/// Both purposes render the same reserve-capable choices.
pub async fn handle_location(
    ctx: &AppContext,
    mut session: UserSession,
    purpose: LocationPurpose,
    lat: f64,
    lon: f64,
    chat: &dyn ChatTransport,
) -> Result<()> {
    let user_id = session.user_id;
    debug!(user_id = user_id, purpose = ?purpose, lat = lat, lon = lon, "Location received");

    chat.send_text_dismissing_location(SEARCHING).await?;

    let query = ctx.nearby_query(lat, lon);
    let outcome = ctx.stations_api().fetch_nearby_stations(query).await;

    session.reset();
    ctx.sessions.set(&session).await?;

    match outcome {
        ApiResult::Success(stations) if stations.is_empty() => {
            info!(user_id = user_id, radius = query.radius_m, "No nearby stations found");
            chat.send_text_with_choices(&no_stations_found(query.radius_m), &build_main_menu_choices()).await?;
        }
        ApiResult::Success(stations) => {
            info!(user_id = user_id, count = stations.len(), "Nearby stations listed");
            chat.send_text_with_choices(&nearby_stations(&stations), &build_station_choices(&stations)).await?;
        }
        ApiResult::Failure(failure) => {
            chat.send_text_with_choices(&nearby_search_failed(&failure.error_code), &build_main_menu_choices()).await?;
        }
    }

    Ok(())
}
