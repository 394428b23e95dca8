use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and the process-wide
/// generation status indicator.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerbridge-api",
        "ai": if state.ai_online { "online" } else { "config_error" },
        "notion_configured": state.notion_configured,
    }))
}
