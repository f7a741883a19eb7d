mod chat;
mod health;
mod info;
mod metrics;

pub use chat::chat_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use metrics::metrics_handler;
