//! HTTP API for DWLR water insights.
//!
//! # Routes
//!
//! - `GET /health` - liveness probe
//! - `GET /api/ping` - echoes `PING_MESSAGE`
//! - `GET /api/demo` - fixed demo payload
//! - `POST /api/ai/chat` - forwards a message list to the completion API
//! - anything else under `/api` - `404 {"error": "API endpoint not found"}`
//!
//! With a static directory configured, every other path serves the built
//! web app, falling back to its `index.html`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod upstream;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

pub use config::{Args, ServerConfig};
pub use error::ApiError;
pub use upstream::{CompletionClient, OpenAiClient, UpstreamError};

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Browser origins allowed to call the API with credentials.
pub const ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

/// Shared, immutable handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub completions: Arc<dyn CompletionClient>,
}

impl AppState {
    pub fn new(config: ServerConfig, completions: Arc<dyn CompletionClient>) -> Self {
        Self {
            config: Arc::new(config),
            completions,
        }
    }

    /// State talking to the configured OpenAI-compatible endpoint.
    pub fn with_openai(config: ServerConfig) -> Self {
        let client = OpenAiClient::new(config.openai_base_url.clone());
        Self::new(config, Arc::new(client))
    }
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .into_iter()
        .map(HeaderValue::from_static)
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ping", get(routes::status::ping).fallback(routes::api_not_found))
        .route("/demo", get(routes::status::demo).fallback(routes::api_not_found))
        .route("/ai/chat", post(routes::chat::chat).fallback(routes::api_not_found))
        .fallback(routes::api_not_found);

    let mut router = Router::new()
        .route("/health", get(routes::status::health))
        .nest("/api", api);

    if let Some(dir) = &state.config.static_dir {
        log::info!("[DWLR] server: serving web app from {}", dir.display());
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(cors_layer())
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}
