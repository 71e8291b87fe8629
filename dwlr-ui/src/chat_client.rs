//! Browser client for the assistant proxy (`POST /api/ai/chat`).

use crate::config;
use crate::js_bridge::describe_js_error;
use dwlr_core::chat::{ChatMessage, ChatReply, ChatRequest, ErrorBody};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChatError {
    /// The request never got an HTTP response
    #[error("{0}")]
    Unreachable(String),

    /// The server answered with an error status
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// A 2xx body that is not a chat reply
    #[error("Invalid response from assistant: {0}")]
    InvalidResponse(String),
}

/// Send the transcript and return the assistant's reply text.
pub async fn send_chat(messages: &[ChatMessage]) -> Result<String, ChatError> {
    let url = config::chat_endpoint();
    let body = serde_json::to_string(&ChatRequest {
        messages: messages.to_vec(),
    })
    .map_err(|e| ChatError::InvalidResponse(e.to_string()))?;

    log::info!("[DWLR] chat: sending {} messages to {}", messages.len(), url);
    let (status, text) = post_json(&url, &body).await.map_err(|e| {
        let reason = describe_js_error(&e);
        log::error!("[DWLR] chat: request failed: {}", reason);
        ChatError::Unreachable(reason)
    })?;
    interpret_reply(status, &text)
}

async fn post_json(url: &str, body: &str) -> Result<(u16, String), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_mode(RequestMode::Cors);
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(response.text()?).await?;
    Ok((response.status(), text.as_string().unwrap_or_default()))
}

fn interpret_reply(status: u16, body: &str) -> Result<String, ChatError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<ChatReply>(body)
            .map(|reply| reply.content)
            .map_err(|e| ChatError::InvalidResponse(e.to_string()));
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|err| err.details.unwrap_or(err.error))
        .unwrap_or_else(|_| format!("API request failed with status {}", status));
    log::warn!("[DWLR] chat: server answered {}: {}", status, message);
    Err(ChatError::Rejected { status, message })
}
