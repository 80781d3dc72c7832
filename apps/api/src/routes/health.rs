use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-builder-api"
    }))
}

/// GET /api/ping
/// Liveness probe for the browser client; the message is configurable.
pub async fn ping_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.config.ping_message }))
}
