use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub mod config;
pub mod gateway;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod rate_limit;
pub mod state;

use state::AppState;

// Build the router with all routes
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::info_handler))
        .route("/chat", post(handlers::chat_handler))
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
