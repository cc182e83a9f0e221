//! Help command handler

use crate::presentation::messages::HELP;
use crate::transport::ChatTransport;
use crate::utils::errors::Result;

/// Handle /help. The conversation state is left untouched.
pub async fn handle_help(chat: &dyn ChatTransport) -> Result<()> {
    chat.send_text(HELP).await
}
