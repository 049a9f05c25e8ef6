use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::time::Duration;

use super::{ChatClient, CompletionResult};
use crate::config::prompt::{DEFAULT_CHAT_MODEL, DEFAULT_TYPHOON_BASE_URL, SYSTEM_PROMPT};

pub struct TyphoonClient {
    http: HttpClient,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl TyphoonClient {
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        temperature: f32,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self, Box<dyn StdError + Send + Sync>> {
        let chat_model = model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());
        let api_url = base_url.unwrap_or_else(|| DEFAULT_TYPHOON_BASE_URL.to_string());
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| format!("Invalid API key format: {}", e))?,
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Box::new(e) as Box<dyn StdError + Send + Sync>)?;

        Ok(Self {
            http,
            model: chat_model,
            base_url: api_url,
            temperature,
            max_tokens,
        })
    }
}

#[async_trait]
impl ChatClient for TyphoonClient {
    /// One best-effort completion call. Transport errors, timeouts, non-2xx
    /// statuses, unparsable bodies and empty `choices` all collapse into
    /// `Failure` with a diagnostic; the response body is parsed regardless
    /// of HTTP status since the API reports quota and policy errors as JSON.
    async fn complete(&self, user_text: &str) -> CompletionResult {
        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let req = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_text.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let resp = match self.http.post(&url).json(&req).send().await {
            Ok(r) => r,
            Err(e) => {
                return CompletionResult::Failure {
                    reason: format!("completion request failed: {}", e),
                }
            }
        };

        let status = resp.status();
        let body = match resp.text().await {
            Ok(b) => b,
            Err(e) => {
                return CompletionResult::Failure {
                    reason: format!("failed reading completion response: {}", e),
                }
            }
        };

        match serde_json::from_str::<ChatResponse>(&body) {
            Ok(parsed) => match parsed.choices.into_iter().next() {
                Some(choice) => CompletionResult::Success {
                    reply_text: choice.message.content,
                },
                None => CompletionResult::Failure {
                    reason: format!("completion response had no choices (status {})", status),
                },
            },
            Err(_) => CompletionResult::Failure {
                reason: format!("unexpected completion response (status {}): {}", status, body),
            },
        }
    }
}
