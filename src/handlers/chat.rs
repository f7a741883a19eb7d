use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use crate::metrics::{GATEWAY_ERRORS_TOTAL, RATE_LIMITED_TOTAL, REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{ChatRequest, ChatResponse, ChatStatus};
use crate::state::AppState;

// 429 rejection carrying the policy text
pub struct RateLimited {
    detail: String,
}

impl IntoResponse for RateLimited {
    fn into_response(self) -> Response {
        (
            StatusCode::TOO_MANY_REQUESTS,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
}

// chat handler: quota check first, then one gateway call
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, RateLimited> {
    REQUEST_TOTAL.inc();

    let client_key = addr.ip().to_string();

    let remaining = state
        .rate_limiter
        .check_and_consume(&client_key)
        .map_err(|_| {
            RATE_LIMITED_TOTAL.inc();
            RateLimited {
                detail: format!(
                    "Rate limit exceeded. Free tier: {}",
                    state.rate_limiter.policy().describe()
                ),
            }
        })?;

    let prompt = format!("Answer this coding question: {}", payload.message);

    let start_time = Instant::now();
    let result = state.gateway.generate(&prompt).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    // A failed gateway call keeps the consumed quota slot and comes back
    // as a well-formed error body, never as a transport fault.
    let response = match result {
        Ok(text) => ChatResponse {
            response: text,
            remaining_requests: remaining,
            status: ChatStatus::Success,
        },
        Err(err) => {
            GATEWAY_ERRORS_TOTAL.inc();
            ChatResponse {
                response: format!("Error: {}", err),
                remaining_requests: remaining,
                status: ChatStatus::Error,
            }
        }
    };

    Ok(Json(response))
}
