use crate::gateway::OllamaClient;
use crate::rate_limit::RateLimiter;

// app's shared state
pub struct AppState {
    pub gateway: OllamaClient,
    pub rate_limiter: RateLimiter,
}
