//! Client for the hosted chat completion API.

use async_trait::async_trait;
use dwlr_core::chat::ChatMessage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MODEL: &str = "gpt-3.5-turbo";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// Failure talking to the completion API.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct UpstreamError {
    /// HTTP status the API answered with; `None` for transport failures
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: None, message: message.into() }
    }
}

/// Body sent to `POST {base}/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'static str,
    pub messages: &'a [ChatMessage],
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(messages: &'a [ChatMessage]) -> Self {
        Self {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Chat completion capability. Returns the first choice's text, if any.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<Option<String>, UpstreamError>;
}

/// OpenAI-compatible client over reqwest.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<Option<String>, UpstreamError> {
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&CompletionRequest::new(messages))
            .send()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::transport(e.to_string()))?;

        if !status.is_success() {
            return Err(UpstreamError {
                status: Some(status.as_u16()),
                message: error_message(&body),
            });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| UpstreamError::transport(format!("invalid completion response: {e}")))?;
        Ok(first_content(parsed))
    }
}

fn first_content(response: CompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
}

/// Message from an API error body, or a generic one.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| "Unknown error occurred".to_string())
}
