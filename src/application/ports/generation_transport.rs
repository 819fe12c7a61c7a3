use async_trait::async_trait;

use super::api_key_source::ApiKey;
use super::generate_content::{GenerateContentRequest, GenerateContentResponse};

/// One request/response round trip to the generation service.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error("unreadable response envelope: {0}")]
    InvalidEnvelope(String),
}
