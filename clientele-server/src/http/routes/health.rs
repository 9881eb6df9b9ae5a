//! Welcome and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

/// GET / - static welcome payload
async fn welcome() -> Json<JsonValue> {
    Json(json!({ "response": "Welcome to our clients portal!" }))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Welcome and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
}
