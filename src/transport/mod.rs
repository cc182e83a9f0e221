//! Chat transport module
//!
//! The conversation core only talks to users through [`ChatTransport`]. The
//! Telegram implementation lives in [`telegram`]; tests substitute their own.

pub mod telegram;

use async_trait::async_trait;
use crate::presentation::ChoiceSet;
use crate::utils::errors::Result;

pub use telegram::TelegramTransport;

/// Outgoing side of a chat with a single user
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send plain text
    async fn send_text(&self, text: &str) -> Result<()>;

    /// Send text with selectable choices attached
    async fn send_text_with_choices(&self, text: &str, choices: &ChoiceSet) -> Result<()>;

    /// Send text together with a control that shares the user's location
    async fn send_text_requesting_location(&self, text: &str) -> Result<()>;

    /// Send text and withdraw a pending location request, if the chat shows one
    async fn send_text_dismissing_location(&self, text: &str) -> Result<()> {
        self.send_text(text).await
    }
}
