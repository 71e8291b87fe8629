//! Chat message types shared by the assistant page and the chat proxy.

use serde::{Deserialize, Serialize};

/// First message shown in a fresh assistant transcript.
pub const ASSISTANT_GREETING: &str = "Hi! I'm your water level assistant. Ask me about water levels, seasonal trends, or safety precautions for any location in India.";

/// System prompt prepended by the assistant page before calling the proxy.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant for DWLR (Department of Water Level Resources) in India. \
Your expertise includes water levels, seasonal patterns, safety measures, and water resource management. \
Be concise, accurate, and focus on providing practical information.";

const FALLBACK_REPLIES: [(&str, &str); 3] = [
    (
        "hello",
        "Hello! I'm your water level assistant. It seems I'm having trouble connecting to the AI service. Please try again in a moment.",
    ),
    (
        "hi",
        "Hi there! I'm experiencing some technical difficulties. I'll be back to help you with water level information across India shortly.",
    ),
    (
        "water levels",
        "I'm currently unable to fetch real-time water level data. Please check back soon or visit the official DWLR dashboard for the latest information.",
    ),
];

const DEFAULT_FALLBACK_REPLY: &str = "I apologize, but I'm currently experiencing technical difficulties. Please try your query again in a few moments or check back later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Body of `POST /api/ai/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
}

/// Successful reply from `POST /api/ai/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub content: String,
}

/// Error body returned by the server for any non-2xx response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Canned reply for when the assistant service cannot be reached.
///
/// Keywords are matched case-insensitively in declaration order.
pub fn fallback_reply(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    FALLBACK_REPLIES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_FALLBACK_REPLY)
}

/// Synthetic assistant message appended to the transcript after a failure.
pub fn failure_message(reason: &str) -> ChatMessage {
    ChatMessage::assistant(format!(
        "I'm having trouble connecting to the AI service ({reason}). Please try your question again in a moment."
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
        let parsed: ChatMessage =
            serde_json::from_str(r#"{"role":"assistant","content":"ok"}"#).unwrap();
        assert_eq!(parsed.role, Role::Assistant);
    }

    #[test]
    fn unknown_role_is_rejected() {
        let parsed = serde_json::from_str::<ChatMessage>(r#"{"role":"tool","content":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn fallback_matches_keywords_in_order() {
        assert!(fallback_reply("Hello there").starts_with("Hello!"));
        assert!(fallback_reply("HI").starts_with("Hi there!"));
        assert!(fallback_reply("current water levels in Pune").starts_with("I'm currently unable"));
        assert_eq!(fallback_reply("monsoon?"), DEFAULT_FALLBACK_REPLY);
    }

    #[test]
    fn error_body_omits_missing_details() {
        let body = ErrorBody { error: "bad".to_string(), details: None };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"error":"bad"}"#);
    }
}
