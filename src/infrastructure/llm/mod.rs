mod api_key_sources;
mod gemini_transport;
mod mock_transport;

pub use api_key_sources::{EnvApiKeySource, StaticApiKeySource};
pub use gemini_transport::GeminiTransport;
pub use mock_transport::{MockGenerationTransport, inline_response, text_response};
