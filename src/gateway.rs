use std::fmt;
use std::time::Duration;

use reqwest::StatusCode;

use crate::models::{GenerateRequest, GenerateResponse};

// Failure modes of the inference backend
#[derive(Debug, PartialEq, Eq)]
pub enum GatewayError {
    ServiceUnavailable,
    Unreachable,
    BadResponse,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::ServiceUnavailable => write!(f, "AI service unavailable"),
            GatewayError::Unreachable => write!(f, "AI service unreachable"),
            GatewayError::BadResponse => write!(f, "AI service returned an unexpected reply"),
        }
    }
}

impl std::error::Error for GatewayError {}

// Client for the Ollama generate endpoint
pub struct OllamaClient {
    client: reqwest::Client,
    url: String,
    model: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(url: String, model: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            model,
            timeout,
        }
    }

    // Send one prompt to Ollama and normalize the outcome. The timeout
    // covers the whole call; on expiry this fails with Unreachable
    // instead of blocking the handler.
    pub async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let result = self
            .client
            .post(format!("{}/api/generate", self.url))
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await;

        match result {
            Ok(res) => {
                let status = res.status();
                let body = res.text().await.map_err(|_| GatewayError::Unreachable)?;
                decode_reply(status, &body)
            }
            Err(_) => Err(GatewayError::Unreachable),
        }
    }
}

// Map the raw backend reply to a completion or a normalized error
fn decode_reply(status: StatusCode, body: &str) -> Result<String, GatewayError> {
    if !status.is_success() {
        return Err(GatewayError::ServiceUnavailable);
    }

    match serde_json::from_str::<GenerateResponse>(body) {
        Ok(reply) => Ok(reply.response),
        Err(_) => Err(GatewayError::BadResponse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_reply_yields_completion_verbatim() {
        let body = r#"{"model":"tinyllama:latest","response":"use std::fmt;"}"#;
        assert_eq!(
            decode_reply(StatusCode::OK, body),
            Ok("use std::fmt;".to_string())
        );
    }

    #[test]
    fn non_success_status_maps_to_service_unavailable() {
        let body = r#"{"error":"model not loaded"}"#;
        assert_eq!(
            decode_reply(StatusCode::INTERNAL_SERVER_ERROR, body),
            Err(GatewayError::ServiceUnavailable)
        );
    }

    #[test]
    fn malformed_body_maps_to_bad_response() {
        assert_eq!(
            decode_reply(StatusCode::OK, "not json at all"),
            Err(GatewayError::BadResponse)
        );
        // well-formed json missing the completion field is just as bad
        assert_eq!(
            decode_reply(StatusCode::OK, r#"{"model":"tinyllama:latest"}"#),
            Err(GatewayError::BadResponse)
        );
    }
}
