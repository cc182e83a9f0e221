//! Cancel command handler

use crate::presentation::build_main_menu_choices;
use crate::presentation::messages::CANCELLED;
use crate::state::{AppContext, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Handle /cancel inside the return flow. Any stored station id is dropped.
pub async fn handle_cancel(ctx: &AppContext, mut session: UserSession, chat: &dyn ChatTransport) -> Result<()> {
    let details = session.state.to_string();
    session.reset();
    ctx.sessions.set(&session).await?;

    chat.send_text_with_choices(CANCELLED, &build_main_menu_choices()).await?;
    log_user_action(session.user_id, "cancel", Some(&details));

    Ok(())
}
