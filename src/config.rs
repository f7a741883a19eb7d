use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "devnest-gateway")]
#[command(about = "Rate-limited relay for a self-hosted Ollama coding assistant")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,

    // Ollama server url
    #[arg(short, long, default_value = "http://localhost:11434")]
    pub ollama_url: String,

    // Model requested from Ollama
    #[arg(short, long, default_value = "tinyllama:latest")]
    pub model: String,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 10)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 3600)]
    pub rate_window: u64,

    // Timeout for one Ollama call in seconds
    #[arg(long, default_value_t = 30)]
    pub gateway_timeout: u64,
}
