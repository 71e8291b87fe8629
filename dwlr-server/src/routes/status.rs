use crate::AppState;
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

/// Message returned by `GET /api/demo`.
pub const DEMO_MESSAGE: &str = "Hello from the DWLR server";

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn ping(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.config.ping_message }))
}

pub async fn demo() -> Json<Value> {
    Json(json!({ "message": DEMO_MESSAGE }))
}
