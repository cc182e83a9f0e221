//! Chat transport that records every outgoing message

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use MiBiciBot::presentation::ChoiceSet;
use MiBiciBot::transport::ChatTransport;
use MiBiciBot::Result;

/// One message sent through the transport
#[derive(Debug, Clone, PartialEq)]
pub enum SentMessage {
    Text(String),
    WithChoices(String, ChoiceSet),
    RequestingLocation(String),
    DismissingLocation(String),
}

impl SentMessage {
    pub fn text(&self) -> &str {
        match self {
            SentMessage::Text(text)
            | SentMessage::WithChoices(text, _)
            | SentMessage::RequestingLocation(text)
            | SentMessage::DismissingLocation(text) => text,
        }
    }

    pub fn choices(&self) -> Option<&ChoiceSet> {
        match self {
            SentMessage::WithChoices(_, choices) => Some(choices),
            _ => None,
        }
    }
}

/// Records messages instead of sending them; clones share the log
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<SentMessage>>>,
    panic_on_location_request: bool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose location request panics mid-handler
    pub fn panicking_on_location_request() -> Self {
        Self {
            panic_on_location_request: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> SentMessage {
        self.sent().last().cloned().expect("nothing was sent")
    }

    pub fn count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    fn push(&self, message: SentMessage) {
        self.sent.lock().unwrap().push(message);
    }
}

#[async_trait]
impl ChatTransport for RecordingTransport {
    async fn send_text(&self, text: &str) -> Result<()> {
        self.push(SentMessage::Text(text.to_string()));
        Ok(())
    }

    async fn send_text_with_choices(&self, text: &str, choices: &ChoiceSet) -> Result<()> {
        self.push(SentMessage::WithChoices(text.to_string(), choices.clone()));
        Ok(())
    }

    async fn send_text_requesting_location(&self, text: &str) -> Result<()> {
        if self.panic_on_location_request {
            panic!("location keyboard unavailable");
        }
        self.push(SentMessage::RequestingLocation(text.to_string()));
        Ok(())
    }

    async fn send_text_dismissing_location(&self, text: &str) -> Result<()> {
        self.push(SentMessage::DismissingLocation(text.to_string()));
        Ok(())
    }
}
