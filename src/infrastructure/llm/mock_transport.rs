use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{
    ApiKey, Candidate, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationTransport, Part, TransportError,
};

type Scripted = Result<GenerateContentResponse, TransportError>;

/// Scripted transport that records every request it receives.
#[derive(Default)]
pub struct MockGenerationTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(String, GenerateContentRequest)>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockGenerationTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds each call open for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn push_response(&self, response: Scripted) -> &Self {
        self.lock_responses().push_back(response);
        self
    }

    pub fn push_text(&self, text: &str) -> &Self {
        self.push_response(Ok(text_response(text)))
    }

    pub fn push_inline_audio(&self, mime_type: &str, base64_data: &str) -> &Self {
        self.push_response(Ok(inline_response(mime_type, base64_data)))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<(String, GenerateContentRequest)> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn last_request(&self) -> Option<GenerateContentRequest> {
        self.requests().pop().map(|(_, request)| request)
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Scripted>> {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl GenerationTransport for MockGenerationTransport {
    async fn generate_content(
        &self,
        _api_key: &ApiKey,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((model.to_string(), request.clone()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.lock_responses()
            .pop_front()
            .unwrap_or_else(|| Ok(GenerateContentResponse::default()))
    }
}

pub fn text_response(text: &str) -> GenerateContentResponse {
    single_part_response(Part::text(text))
}

pub fn inline_response(mime_type: &str, base64_data: &str) -> GenerateContentResponse {
    single_part_response(Part::inline_data(mime_type, base64_data))
}

fn single_part_response(part: Part) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                role: Some("model".to_string()),
                parts: vec![part],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
    }
}
