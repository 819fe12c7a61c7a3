mod analyze;
mod error;
mod export;
mod health;
mod speech;

pub use analyze::{analyze_handler, analyze_upload_handler};
pub use error::{ApiError, ErrorResponse};
pub use export::export_handler;
pub use health::health_handler;
pub use speech::{SpeechRequest, speech_handler};
