use axum::Json;
use serde_json::{json, Value};

/// Health check endpoint
///
/// Returns 200 OK with a fixed liveness payload
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "ok": true }))
}
