use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use dwlr_core::chat::ChatMessage;
use dwlr_server::{create_router, AppState, CompletionClient, ServerConfig, UpstreamError};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for oneshot

/// Completion client answering with a fixed outcome and recording calls.
struct MockCompletions {
    reply: Result<Option<String>, UpstreamError>,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl MockCompletions {
    fn replying(reply: Result<Option<String>, UpstreamError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl CompletionClient for MockCompletions {
    async fn complete(
        &self,
        _api_key: &str,
        messages: &[ChatMessage],
    ) -> Result<Option<String>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = messages.to_vec();
        self.reply.clone()
    }
}

fn config_with_key() -> ServerConfig {
    ServerConfig {
        openai_api_key: Some("sk-test".to_string()),
        ..ServerConfig::default()
    }
}

fn app(config: ServerConfig, client: Arc<MockCompletions>) -> axum::Router {
    create_router(AppState::new(config, client))
}

async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ai/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let response = app(ServerConfig::default(), MockCompletions::replying(Ok(None)))
        .oneshot(get("/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_response(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn ping_defaults_to_pong() {
    let response = app(ServerConfig::default(), MockCompletions::replying(Ok(None)))
        .oneshot(get("/api/ping"))
        .await
        .unwrap();
    assert_eq!(json_response(response).await["message"], "pong");
}

#[tokio::test]
async fn ping_honours_configured_message() {
    let config = ServerConfig {
        ping_message: "hello from env".to_string(),
        ..ServerConfig::default()
    };
    let response = app(config, MockCompletions::replying(Ok(None)))
        .oneshot(get("/api/ping"))
        .await
        .unwrap();
    assert_eq!(json_response(response).await["message"], "hello from env");
}

#[tokio::test]
async fn demo_returns_message() {
    let response = app(ServerConfig::default(), MockCompletions::replying(Ok(None)))
        .oneshot(get("/api/demo"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_response(response).await["message"],
        "Hello from the DWLR server"
    );
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let response = app(ServerConfig::default(), MockCompletions::replying(Ok(None)))
        .oneshot(get("/api/stations"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_response(response).await,
        json!({ "error": "API endpoint not found" })
    );
}

#[tokio::test]
async fn wrong_method_on_chat_is_json_404() {
    let response = app(config_with_key(), MockCompletions::replying(Ok(None)))
        .oneshot(get("/api/ai/chat"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_response(response).await["error"], "API endpoint not found");
}

#[tokio::test]
async fn chat_without_key_is_rejected_before_upstream() {
    let client = MockCompletions::replying(Ok(Some("unused".to_string())));
    let response = app(ServerConfig::default(), Arc::clone(&client))
        .oneshot(chat_request(r#"{"messages":[{"role":"user","content":"hi"}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_response(response).await["error"],
        "OPENAI_API_KEY is not set. Add it in environment settings."
    );
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_message_list_is_invalid() {
    let client = MockCompletions::replying(Ok(Some("unused".to_string())));
    let response = app(config_with_key(), Arc::clone(&client))
        .oneshot(chat_request(r#"{"messages":[]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_response(response).await["error"],
        "Invalid request body. Expected { messages: ChatMessage[] }."
    );
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn malformed_bodies_are_invalid() {
    for body in [
        "{}",
        r#"{"messages":"hi"}"#,
        r#"{"messages":[{"role":"tool","content":"x"}]}"#,
        "not json",
    ] {
        let response = app(config_with_key(), MockCompletions::replying(Ok(None)))
            .oneshot(chat_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(
            json_response(response).await["error"],
            "Invalid request body. Expected { messages: ChatMessage[] }."
        );
    }
}

#[tokio::test]
async fn oversized_body_is_413() {
    let client = MockCompletions::replying(Ok(Some("unused".to_string())));
    let padding = "x".repeat(dwlr_server::BODY_LIMIT_BYTES);
    let body = format!(r#"{{"messages":[{{"role":"user","content":"{}"}}]}}"#, padding);
    let response = app(config_with_key(), Arc::clone(&client))
        .oneshot(chat_request(&body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json_response(response).await["error"], "Request body too large");
    assert_eq!(client.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn chat_returns_first_choice_verbatim() {
    let reply = "Groundwater in Pune is below average this season.\n\n- Limit usage";
    let client = MockCompletions::replying(Ok(Some(reply.to_string())));
    let response = app(config_with_key(), Arc::clone(&client))
        .oneshot(chat_request(
            r#"{"messages":[{"role":"system","content":"be brief"},{"role":"user","content":"Pune?"}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_response(response).await, json!({ "content": reply }));
    assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    let forwarded = client.last_messages.lock().unwrap().clone();
    assert_eq!(
        forwarded,
        vec![ChatMessage::system("be brief"), ChatMessage::user("Pune?")]
    );
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let client = MockCompletions::replying(Err(UpstreamError {
        status: Some(401),
        message: "Incorrect API key provided".to_string(),
    }));
    let response = app(config_with_key(), client)
        .oneshot(chat_request(r#"{"messages":[{"role":"user","content":"hi"}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        json_response(response).await,
        json!({
            "error": "Error processing your request",
            "details": "Incorrect API key provided"
        })
    );
}

#[tokio::test]
async fn transport_failure_is_500() {
    let client = MockCompletions::replying(Err(UpstreamError::transport("connection refused")));
    let response = app(config_with_key(), client)
        .oneshot(chat_request(r#"{"messages":[{"role":"user","content":"hi"}]}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_response(response).await["details"], "connection refused");
}

#[tokio::test]
async fn empty_completion_is_500() {
    for reply in [Ok(None), Ok(Some(String::new()))] {
        let response = app(config_with_key(), MockCompletions::replying(reply))
            .oneshot(chat_request(r#"{"messages":[{"role":"user","content":"hi"}]}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Error processing your request");
        assert_eq!(body["details"], "No content in AI response");
    }
}

#[tokio::test]
async fn cors_allows_dev_origin_with_credentials() {
    let request = Request::builder()
        .uri("/api/ping")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app(ServerConfig::default(), MockCompletions::replying(Ok(None)))
        .oneshot(request)
        .await
        .unwrap();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:5173"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn cors_ignores_unknown_origin() {
    let request = Request::builder()
        .uri("/api/ping")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app(ServerConfig::default(), MockCompletions::replying(Ok(None)))
        .oneshot(request)
        .await
        .unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn web_app_routes_serve_index_with_200() {
    let dir = std::env::temp_dir().join(format!("dwlr-web-app-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("index.html"), "<html>dwlr</html>").unwrap();
    let config = ServerConfig {
        static_dir: Some(dir.clone()),
        ..ServerConfig::default()
    };
    let router = app(config, MockCompletions::replying(Ok(None)));

    let response = router.clone().oneshot(get("/location")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"<html>dwlr</html>");

    let response = router.oneshot(get("/api/stations")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_response(response).await,
        json!({ "error": "API endpoint not found" })
    );

    std::fs::remove_dir_all(&dir).unwrap();
}
