use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use devnest_gateway::config::Args;
use devnest_gateway::gateway::OllamaClient;
use devnest_gateway::rate_limit::{RateLimitPolicy, RateLimiter};
use devnest_gateway::state::AppState;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    let policy = RateLimitPolicy {
        max_requests: args.rate_limit,
        window: Duration::from_secs(args.rate_window),
    };

    // creating shared state
    let state = Arc::new(AppState {
        gateway: OllamaClient::new(
            args.ollama_url.clone(),
            args.model.clone(),
            Duration::from_secs(args.gateway_timeout),
        ),
        rate_limiter: RateLimiter::new(policy),
    });

    let app = devnest_gateway::app(Arc::clone(&state));

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    println!("DevNest gateway running on http://localhost:{}", args.port);
    println!(
        "Forwarding to Ollama at {} (model: {})",
        args.ollama_url, args.model
    );
    println!("Rate limit: {}", state.rate_limiter.policy().describe());

    // client identity comes from the connection source address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
