use std::sync::Arc;

use crate::application::services::{ContentAnalysisGateway, SpeechSynthesizer};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<ContentAnalysisGateway>,
    pub speech: Arc<SpeechSynthesizer>,
    pub max_upload_bytes: usize,
}
