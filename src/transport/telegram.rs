//! Telegram transport
//!
//! Renders outgoing messages with teloxide and converts incoming updates into
//! [`InboundEvent`]s.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{
    ButtonRequest, CallbackQuery, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton,
    KeyboardMarkup, KeyboardRemove,
};
use crate::handlers::InboundEvent;
use crate::handlers::commands::Command;
use crate::presentation::ChoiceSet;
use crate::presentation::messages::LOCATION_BUTTON;
use crate::utils::errors::Result;
use super::ChatTransport;

/// Sends replies into one Telegram chat
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
    chat_id: ChatId,
}

impl TelegramTransport {
    pub fn new(bot: Bot, chat_id: ChatId) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.bot.send_message(self.chat_id, text).await?;
        Ok(())
    }

    async fn send_text_with_choices(&self, text: &str, choices: &ChoiceSet) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .reply_markup(inline_keyboard(choices))
            .await?;
        Ok(())
    }

    async fn send_text_requesting_location(&self, text: &str) -> Result<()> {
        let keyboard = KeyboardMarkup::new(vec![vec![
            KeyboardButton::new(LOCATION_BUTTON).request(ButtonRequest::Location),
        ]])
        .resize_keyboard()
        .one_time_keyboard();

        self.bot
            .send_message(self.chat_id, text)
            .reply_markup(keyboard)
            .await?;
        Ok(())
    }

    async fn send_text_dismissing_location(&self, text: &str) -> Result<()> {
        self.bot
            .send_message(self.chat_id, text)
            .reply_markup(KeyboardRemove::new())
            .await?;
        Ok(())
    }
}

/// Render a choice set as an inline keyboard
pub fn inline_keyboard(choices: &ChoiceSet) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(choices.rows.iter().map(|row| {
        row.iter()
            .map(|c| InlineKeyboardButton::callback(c.label.clone(), c.payload.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Map a parsed bot command to an event
pub fn event_from_command(command: Command) -> InboundEvent {
    match command {
        Command::Start => InboundEvent::Start,
        Command::Cancel => InboundEvent::Cancel,
        Command::Help => InboundEvent::Help,
    }
}

/// Map a non-command message to an event.
///
/// Unknown `/commands` and media other than locations yield `None`.
pub fn event_from_message(msg: &Message) -> Option<InboundEvent> {
    if let Some(location) = msg.location() {
        return Some(InboundEvent::LocationShared {
            lat: location.latitude,
            lon: location.longitude,
        });
    }

    text_event(msg.text()?)
}

/// Map a callback query to an event
pub fn event_from_callback(query: &CallbackQuery) -> Option<InboundEvent> {
    query.data.clone().map(InboundEvent::ButtonChoice)
}

fn text_event(text: &str) -> Option<InboundEvent> {
    if text.starts_with('/') {
        return None;
    }
    Some(InboundEvent::TextMessage(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::build_main_menu_choices;

    #[test]
    fn test_inline_keyboard_keeps_rows() {
        let keyboard = inline_keyboard(&build_main_menu_choices());
        assert_eq!(keyboard.inline_keyboard.len(), 3);
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() == 1));
        assert_eq!(keyboard.inline_keyboard[0][0].text, "📍 Ver estaciones cercanas");
    }

    #[test]
    fn test_unknown_commands_are_not_text() {
        assert_eq!(text_event("/foo"), None);
        assert_eq!(text_event("57"), Some(InboundEvent::TextMessage("57".to_string())));
    }

    #[test]
    fn test_commands_map_to_events() {
        assert_eq!(event_from_command(Command::Start), InboundEvent::Start);
        assert_eq!(event_from_command(Command::Cancel), InboundEvent::Cancel);
    }
}
