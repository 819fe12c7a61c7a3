mod audit_prompt;
mod content_analysis_gateway;
mod document_export;
mod gateway_error;
mod single_flight;
mod speech_synthesizer;

pub use audit_prompt::{
    A11Y_SYSTEM_INSTRUCTION, ANALYSIS_INSTRUCTION, RESPONSE_MIME_TYPE, response_schema,
};
pub use content_analysis_gateway::{
    ContentAnalysisGateway, build_analysis_request, parse_analysis_result,
};
pub use document_export::{EXPORT_FILE_NAME, render_standalone_document};
pub use gateway_error::{GatewayError, UpstreamError};
pub use single_flight::{FlightGuard, SingleFlight};
pub use speech_synthesizer::{
    SPEECH_CHANNEL_COUNT, SPEECH_SAMPLE_RATE, SpeechSynthesizer, build_speech_request,
    decode_speech_payload,
};
