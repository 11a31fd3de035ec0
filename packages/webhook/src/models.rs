//! Chat platform webhook payloads.

use serde::{Deserialize, Serialize};

/// Body of a webhook delivery. One delivery may batch several events.
#[derive(Debug, Deserialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    pub reply_token: Option<String>,
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: Option<String>,
}

/// A text message that can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub reply_token: String,
    pub text: String,
}

impl Event {
    /// The answerable text query carried by this event, if any.
    pub fn query(&self) -> Option<Query> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }
        Some(Query {
            reply_token: self.reply_token.clone()?,
            text: message.text.clone()?,
        })
    }
}

/// Body of a reply API call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyRequest {
    pub reply_token: String,
    pub messages: Vec<TextMessage>,
}

#[derive(Debug, Serialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub text: String,
}

impl ReplyRequest {
    pub fn text(reply_token: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            reply_token: reply_token.into(),
            messages: vec![TextMessage {
                message_type: "text",
                text: text.into(),
            }],
        }
    }
}
