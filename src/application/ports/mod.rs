mod api_key_source;
mod generate_content;
mod generation_transport;

pub use api_key_source::{ApiKey, ApiKeySource};
pub use generate_content::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    InlineData, Part, PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};
pub use generation_transport::{GenerationTransport, TransportError};
