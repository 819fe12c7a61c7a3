use crate::application::ports::TransportError;

/// Failures surfaced by the analysis gateway and the speech synthesizer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("upstream: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("audio decode failed: {0}")]
    Decode(String),
    #[error("another {0} request is already in flight")]
    Busy(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("timed out waiting for the generation service")]
    Timeout,
    #[error("transport: {0}")]
    Transport(String),
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("no content in response")]
    EmptyPayload,
    #[error("no audio in response")]
    MissingAudio,
}

impl From<TransportError> for UpstreamError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => UpstreamError::Timeout,
            TransportError::HttpStatus { status, body } => UpstreamError::Status { status, body },
            TransportError::RequestFailed(msg) | TransportError::InvalidEnvelope(msg) => {
                UpstreamError::Transport(msg)
            }
        }
    }
}

impl From<TransportError> for GatewayError {
    fn from(err: TransportError) -> Self {
        GatewayError::Upstream(err.into())
    }
}
