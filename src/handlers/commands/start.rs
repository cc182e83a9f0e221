//! Start command handler
//!
//! /start is accepted in every state and always lands on the main menu.

use tracing::debug;
use crate::presentation::build_main_menu_choices;
use crate::presentation::messages::WELCOME;
use crate::state::{AppContext, UserSession};
use crate::transport::ChatTransport;
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

/// Handle /start: abandon any flow and show the main menu
pub async fn handle_start(ctx: &AppContext, mut session: UserSession, chat: &dyn ChatTransport) -> Result<()> {
    debug!(user_id = session.user_id, state = %session.state, "Processing /start command");

    session.reset();
    ctx.sessions.set(&session).await?;

    chat.send_text_with_choices(WELCOME, &build_main_menu_choices()).await?;
    log_user_action(session.user_id, "start", None);

    Ok(())
}
