use async_trait::async_trait;
use log::error;
use std::sync::Arc;
use thiserror::Error;

use crate::config::prompt::FALLBACK_REPLY;
use crate::llm::{ChatClient, CompletionResult};
use crate::models::webhook::IncomingMessage;

#[derive(Debug, Error)]
pub enum RelayError {
    /// The final send back to the platform failed. Terminal for that
    /// message only; the user receives nothing and there is no retry.
    #[error("reply dispatch failed: {0}")]
    ReplyDispatch(#[from] reqwest::Error),
}

/// Seam over the platform reply API. One-shot reply-token scheme, not a
/// persistent channel.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), RelayError>;
}

/// Drives one message through completion and reply dispatch. Holds only
/// shared read-only collaborators, so any number of messages can be in
/// flight at once.
pub struct Relay {
    chat: Arc<dyn ChatClient>,
    sender: Arc<dyn ReplySender>,
}

impl Relay {
    pub fn new(chat: Arc<dyn ChatClient>, sender: Arc<dyn ReplySender>) -> Self {
        Self { chat, sender }
    }

    /// Every incoming message produces exactly one outbound send: the
    /// completion text verbatim on success, the fixed apology on failure.
    /// The failure diagnostic is logged for operators and goes no further.
    pub async fn process(&self, msg: IncomingMessage) -> Result<(), RelayError> {
        let text = match self.chat.complete(&msg.text).await {
            CompletionResult::Success { reply_text } => reply_text,
            CompletionResult::Failure { reason } => {
                error!("Completion service failure: {}", reason);
                FALLBACK_REPLY.to_string()
            }
        };
        self.sender.reply(&msg.reply_token, &text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct FixedChat {
        result: CompletionResult,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatClient for FixedChat {
        async fn complete(&self, _user_text: &str) -> CompletionResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl ReplySender for RecordingSender {
        async fn reply(&self, reply_token: &str, text: &str) -> Result<(), RelayError> {
            self.sent
                .lock()
                .unwrap()
                .push((reply_token.to_string(), text.to_string()));
            Ok(())
        }
    }

    fn msg(token: &str, text: &str) -> IncomingMessage {
        IncomingMessage {
            reply_token: token.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn success_is_relayed_verbatim() {
        let chat = Arc::new(FixedChat {
            result: CompletionResult::Success {
                reply_text: "Xyz".to_string(),
            },
            calls: AtomicUsize::new(0),
        });
        let sender = Arc::new(RecordingSender::default());
        let relay = Relay::new(chat.clone(), sender.clone());

        relay.process(msg("tok-1", "hello")).await.unwrap();

        assert_eq!(chat.calls.load(Ordering::SeqCst), 1);
        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.as_slice(), &[("tok-1".to_string(), "Xyz".to_string())]);
    }

    #[tokio::test]
    async fn failure_sends_fixed_fallback() {
        let chat = Arc::new(FixedChat {
            result: CompletionResult::Failure {
                reason: "status 500: upstream exploded".to_string(),
            },
            calls: AtomicUsize::new(0),
        });
        let sender = Arc::new(RecordingSender::default());
        let relay = Relay::new(chat, sender.clone());

        relay.process(msg("tok-9", "hello")).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "tok-9");
        // The apology constant, never the diagnostic or an empty string.
        assert_eq!(sent[0].1, FALLBACK_REPLY);
        assert!(!sent[0].1.contains("500"));
    }

    #[tokio::test]
    async fn thai_classroom_exchange_round_trips() {
        let chat = Arc::new(FixedChat {
            result: CompletionResult::Success {
                reply_text: "ลองใช้ ADC ครับ".to_string(),
            },
            calls: AtomicUsize::new(0),
        });
        let sender = Arc::new(RecordingSender::default());
        let relay = Relay::new(chat, sender.clone());

        relay.process(msg("tok-th", "อ่าน LDR ยังไง")).await.unwrap();

        let sent = sender.sent.lock().unwrap();
        assert_eq!(sent[0].1, "ลองใช้ ADC ครับ");
    }
}
