use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::error::Error as StdError;
use std::time::Duration;

use crate::relay::{RelayError, ReplySender};

/// Reply sender backed by the LINE Messaging API.
pub struct LineClient {
    http: HttpClient,
    base_url: String,
}

#[derive(Serialize)]
struct ReplyRequest {
    #[serde(rename = "replyToken")]
    reply_token: String,
    messages: Vec<TextMessage>,
}

#[derive(Serialize)]
struct TextMessage {
    #[serde(rename = "type")]
    message_type: String,
    text: String,
}

impl LineClient {
    pub fn new(
        access_token: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", access_token))
                .map_err(|e| format!("Invalid channel access token format: {}", e))?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl ReplySender for LineClient {
    /// One-shot send against the captured reply token. Non-2xx and
    /// transport failures surface as `RelayError::ReplyDispatch`.
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), RelayError> {
        let url = format!(
            "{}/v2/bot/message/reply",
            self.base_url.trim_end_matches('/')
        );

        let req = ReplyRequest {
            reply_token: reply_token.to_string(),
            messages: vec![TextMessage {
                message_type: "text".to_string(),
                text: text.to_string(),
            }],
        };

        self.http
            .post(&url)
            .json(&req)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_request_serializes_to_api_shape() {
        let req = ReplyRequest {
            reply_token: "tok-1".to_string(),
            messages: vec![TextMessage {
                message_type: "text".to_string(),
                text: "ลองใช้ ADC ครับ".to_string(),
            }],
        };
        let json: serde_json::Value = serde_json::to_value(&req).unwrap();
        assert_eq!(json["replyToken"], "tok-1");
        assert_eq!(json["messages"][0]["type"], "text");
        assert_eq!(json["messages"][0]["text"], "ลองใช้ ADC ครับ");
    }
}
