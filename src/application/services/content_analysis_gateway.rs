use std::sync::Arc;

use crate::application::ports::{
    ApiKeySource, Content, GenerateContentRequest, GenerationConfig, GenerationTransport, Part,
};
use crate::domain::{AnalysisRequest, AnalysisResult};

use super::audit_prompt::{
    A11Y_SYSTEM_INSTRUCTION, ANALYSIS_INSTRUCTION, RESPONSE_MIME_TYPE, response_schema,
};
use super::gateway_error::{GatewayError, UpstreamError};
use super::single_flight::SingleFlight;

const MAX_LOGGED_RESPONSE_CHARS: usize = 500;

/// Sends one document to the generation service and returns the validated audit.
pub struct ContentAnalysisGateway {
    transport: Arc<dyn GenerationTransport>,
    api_keys: Arc<dyn ApiKeySource>,
    model: String,
    in_flight: SingleFlight,
}

impl ContentAnalysisGateway {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";

    pub fn new(
        transport: Arc<dyn GenerationTransport>,
        api_keys: Arc<dyn ApiKeySource>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            api_keys,
            model: model.into(),
            in_flight: SingleFlight::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_in_flight()
    }

    #[tracing::instrument(
        skip(self, request),
        fields(kind = request.kind(), content_len = request.content_len(), model = %self.model)
    )]
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, GatewayError> {
        let api_key = self.api_keys.api_key().ok_or_else(|| {
            tracing::error!("API key is missing, analysis not attempted");
            GatewayError::Configuration("API key is missing".to_string())
        })?;

        let _flight = self
            .in_flight
            .try_begin()
            .ok_or(GatewayError::Busy("analysis"))?;

        let body = build_analysis_request(request);

        tracing::debug!("Sending content for accessibility analysis");

        let response = self
            .transport
            .generate_content(&api_key, &self.model, &body)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Analysis request failed");
                GatewayError::from(e)
            })?;

        let text = response.text().ok_or_else(|| {
            tracing::warn!(
                finish_reason = response.finish_reason().unwrap_or("unknown"),
                "Analysis response carried no text"
            );
            UpstreamError::EmptyPayload
        })?;

        let result = parse_analysis_result(&text)?;

        tracing::info!(
            score = %result.accessibility_score,
            categories = result.compliance_breakdown.len(),
            issues = result.issues_found.len(),
            aoda_compliance = result.metadata.aoda_compliance,
            "Accessibility analysis completed"
        );

        Ok(result)
    }
}

/// Shapes the outbound call: one content part, then the fixed instruction part.
pub fn build_analysis_request(request: &AnalysisRequest) -> GenerateContentRequest {
    let content_part = match request {
        AnalysisRequest::Binary { mime_type, payload } => {
            Part::inline_data(mime_type.as_mime(), payload.as_str())
        }
        AnalysisRequest::Text { content } => Part::text(content.as_str()),
    };

    GenerateContentRequest {
        contents: vec![Content::user(vec![
            content_part,
            Part::text(ANALYSIS_INSTRUCTION),
        ])],
        system_instruction: Some(Content::system(A11Y_SYSTEM_INSTRUCTION)),
        generation_config: Some(GenerationConfig {
            response_mime_type: Some(RESPONSE_MIME_TYPE.to_string()),
            response_schema: Some(response_schema()),
            ..GenerationConfig::default()
        }),
    }
}

/// Decodes and validates the producer's JSON. All-or-nothing.
pub fn parse_analysis_result(text: &str) -> Result<AnalysisResult, GatewayError> {
    serde_json::from_str::<AnalysisResult>(text).map_err(|e| {
        let preview: String = text.chars().take(MAX_LOGGED_RESPONSE_CHARS).collect();
        tracing::error!(
            error = %e,
            raw_response = %preview,
            response_chars = text.chars().count(),
            "Failed to parse analysis result"
        );
        GatewayError::MalformedResponse(e.to_string())
    })
}
