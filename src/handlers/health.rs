use axum::{Json, extract::State, response::IntoResponse};
use std::sync::Arc;

use crate::state::AppState;

// health handler - payload is identical on every call
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "version": env!("CARGO_PKG_VERSION"),
        "tier": "open-source",
        "features": ["ai_chat", "rate_limiting", "self_hosted"],
        "rate_limit": state.rate_limiter.policy().describe(),
    }))
}
