use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{
    ApiKey, GenerateContentRequest, GenerateContentResponse, GenerationTransport, TransportError,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// `generateContent` over HTTPS.
pub struct GeminiTransport {
    client: Client,
    base_url: String,
}

impl GeminiTransport {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::RequestFailed(format!("client build: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

#[async_trait]
impl GenerationTransport for GeminiTransport {
    async fn generate_content(
        &self,
        api_key: &ApiKey,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, TransportError> {
        let url = self.endpoint(model);

        tracing::debug!(model = %model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            tracing::warn!(status = %status, model = %model, "generateContent returned an error status");
            return Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let raw_bytes = response.bytes().await.map_err(map_reqwest_error)?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                error = %e,
                bytes = raw_bytes.len(),
                "Failed to parse generateContent envelope"
            );
            TransportError::InvalidEnvelope(e.to_string())
        })?;

        tracing::debug!(
            model = %model,
            candidates = parsed.candidates.len(),
            bytes = raw_bytes.len(),
            "generateContent response received"
        );

        Ok(parsed)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::RequestFailed(err.to_string())
    }
}
