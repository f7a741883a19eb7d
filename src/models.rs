use serde::{Deserialize, Serialize};

// Inbound chat request
#[derive(Deserialize, Serialize, Clone)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Success,
    Error,
}

// Chat reply - same shape whether the gateway call worked or failed
#[derive(Deserialize, Serialize, Clone)]
pub struct ChatResponse {
    pub response: String,
    pub remaining_requests: u32,
    pub status: ChatStatus,
}

// Ollama API request format
#[derive(Deserialize, Serialize, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub stream: bool,
}

// Ollama API response format
#[derive(Deserialize, Serialize, Clone)]
pub struct GenerateResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_status_uses_lowercase_wire_form() {
        assert_eq!(
            serde_json::to_string(&ChatStatus::Success).unwrap(),
            "\"success\""
        );
        assert_eq!(
            serde_json::to_string(&ChatStatus::Error).unwrap(),
            "\"error\""
        );
    }

    #[test]
    fn generate_response_ignores_extra_ollama_fields() {
        let body = r#"{"model":"tinyllama:latest","response":"fn main() {}","done":true}"#;
        let reply: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(reply.response, "fn main() {}");
    }
}
