//! `POST /api/ai/chat`: single-shot proxy to the completion API.

use crate::error::ApiError;
use crate::upstream::UpstreamError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use dwlr_core::chat::{ChatMessage, ChatReply};
use serde::Deserialize;

/// Loosely typed body so a missing list is a validation error, not a rejection.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    messages: Option<Vec<ChatMessage>>,
}

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<ChatReply>, ApiError> {
    let api_key = state
        .config
        .openai_api_key
        .as_deref()
        .ok_or(ApiError::MissingApiKey)?;

    let messages = match body {
        Ok(Json(ChatBody { messages: Some(messages) })) if !messages.is_empty() => messages,
        Ok(_) => return Err(ApiError::InvalidChatBody),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            log::warn!("[DWLR] chat: rejected body: {}", rejection.body_text());
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            log::warn!("[DWLR] chat: rejected body: {}", rejection.body_text());
            return Err(ApiError::InvalidChatBody);
        }
    };

    log::info!("[DWLR] chat: forwarding {} messages", messages.len());
    match state.completions.complete(api_key, &messages).await {
        Ok(Some(content)) if !content.is_empty() => Ok(Json(ChatReply { content })),
        Ok(_) => Err(upstream_error(UpstreamError::transport("No content in AI response"))),
        Err(e) => Err(upstream_error(e)),
    }
}

fn upstream_error(e: UpstreamError) -> ApiError {
    log::error!("[DWLR] chat: completion API error: {} (status {:?})", e.message, e.status);
    let status = e
        .status
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    ApiError::Upstream {
        status,
        details: e.message,
    }
}
