use axum::{Json, response::IntoResponse};

// root handler - names the service and its operations
pub async fn info_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Welcome to DevNest AI Open Source",
        "endpoints": {
            "chat": "POST /chat",
            "health": "GET /health"
        }
    }))
}
