//! Chat with the water level assistant through the server proxy.

use dioxus::prelude::*;
use dwlr_core::chat::{fallback_reply, failure_message, ChatMessage, Role, ASSISTANT_GREETING, SYSTEM_PROMPT};
use dwlr_ui::chat_client::{send_chat, ChatError};
use dwlr_ui::components::{ChartHeader, ErrorDisplay};
use dwlr_ui::js_bridge;

const TRANSCRIPT_ID: &str = "dwlr-chat-transcript";

/// Transcript sent to the proxy: the system prompt, then the conversation.
fn outgoing(transcript: &[ChatMessage]) -> Vec<ChatMessage> {
    std::iter::once(ChatMessage::system(SYSTEM_PROMPT))
        .chain(transcript.iter().cloned())
        .collect()
}

#[component]
pub fn AssistantPage() -> Element {
    let mut messages = use_signal(|| vec![ChatMessage::assistant(ASSISTANT_GREETING)]);
    let mut input = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        let _ = messages.read().len();
        let _ = loading();
        js_bridge::scroll_to_bottom(TRANSCRIPT_ID);
    });

    let can_send = !input.read().trim().is_empty() && !loading();

    let mut send = move || {
        let prompt = input.peek().trim().to_string();
        if prompt.is_empty() || *loading.peek() {
            return;
        }
        input.set(String::new());
        error.set(None);
        messages.write().push(ChatMessage::user(prompt.clone()));
        loading.set(true);

        spawn(async move {
            let request = outgoing(&messages.peek());
            match send_chat(&request).await {
                Ok(reply) => messages.write().push(ChatMessage::assistant(reply)),
                Err(ChatError::Unreachable(reason)) => {
                    log::warn!("[DWLR] assistant: proxy unreachable ({}), using fallback reply", reason);
                    error.set(Some(format!("Failed to get response: {}", reason)));
                    messages.write().push(ChatMessage::assistant(fallback_reply(&prompt)));
                }
                Err(e) => {
                    error.set(Some(format!("Failed to get response: {}", e)));
                    messages.write().push(failure_message(&e.to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 768px; margin: 0 auto; display: grid; gap: 16px;",
            ChartHeader {
                title: "Water Level AI Assistant".to_string(),
                subtitle: "Get insights about water levels, seasonal trends, and safety information across India".to_string(),
            }
            div {
                style: "border: 1px solid #e5e7eb; border-radius: 12px; background: #fff; overflow: hidden;",
                div {
                    id: TRANSCRIPT_ID,
                    style: "height: 480px; overflow-y: auto; padding: 16px; display: flex; flex-direction: column; gap: 12px;",
                    for (index, message) in messages.read().iter().enumerate() {
                        Bubble { key: "{index}", message: message.clone() }
                    }
                    if loading() {
                        div {
                            style: "align-self: flex-start; padding: 8px 14px; border-radius: 16px; background: #f3f4f6; color: #6b7280; font-size: 14px;",
                            "Assistant is typing…"
                        }
                    }
                }
                if let Some(message) = error() {
                    div {
                        style: "padding: 0 16px;",
                        ErrorDisplay { message }
                    }
                }
                form {
                    style: "display: flex; gap: 8px; padding: 12px 16px; border-top: 1px solid #e5e7eb;",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        send();
                    },
                    input {
                        r#type: "text",
                        value: "{input}",
                        placeholder: "Ask about water levels in Mumbai, monsoon safety, etc.",
                        style: "flex: 1; padding: 8px 12px; font-size: 14px; border: 1px solid #d1d5db; border-radius: 6px;",
                        oninput: move |evt| input.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: !can_send,
                        style: if can_send {
                            "padding: 8px 16px; border: none; border-radius: 6px; background: #2563eb; color: #fff; cursor: pointer;"
                        } else {
                            "padding: 8px 16px; border: none; border-radius: 6px; background: #93c5fd; color: #fff; cursor: not-allowed;"
                        },
                        "Send"
                    }
                }
            }
            p {
                style: "margin: 0; font-size: 12px; text-align: center; color: #9ca3af;",
                "The AI may occasionally generate incorrect information. Please verify critical information."
            }
        }
    }
}

#[component]
fn Bubble(message: ChatMessage) -> Element {
    let style = match message.role {
        Role::User => "align-self: flex-end; background: #2563eb; color: #fff;",
        _ => "align-self: flex-start; background: #f3f4f6; color: #111827;",
    };

    rsx! {
        div {
            style: "{style} max-width: 80%; padding: 8px 14px; border-radius: 16px; font-size: 14px; white-space: pre-wrap;",
            "{message.content}"
        }
    }
}
