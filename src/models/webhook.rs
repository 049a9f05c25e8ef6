use serde::Deserialize;

/// Top-level LINE callback body: zero or more events per delivery.
#[derive(Deserialize, Debug, Clone)]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct WebhookEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "replyToken")]
    pub reply_token: Option<String>,
    pub message: Option<MessageContent>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MessageContent {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: Option<String>,
}

/// One verified text message, normalized out of the platform envelope.
/// Lives for a single request; nothing is kept across callbacks.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub reply_token: String,
    pub text: String,
}

impl WebhookEvent {
    /// Text-message events normalize to an `IncomingMessage`; every other
    /// event kind (stickers, follows, joins) is skipped, not an error.
    pub fn into_incoming(self) -> Option<IncomingMessage> {
        if self.event_type != "message" {
            return None;
        }
        let reply_token = self.reply_token?;
        let message = self.message?;
        if message.message_type != "text" {
            return None;
        }
        Some(IncomingMessage {
            reply_token,
            text: message.text?,
        })
    }
}
