use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::infrastructure::audio::{WAV_MIME_TYPE, encode_wav};
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Deserialize)]
pub struct SpeechRequest {
    pub text: String,
}

#[tracing::instrument(skip_all)]
pub async fn speech_handler(
    State(state): State<AppState>,
    Json(request): Json<SpeechRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request("Text must not be empty"));
    }

    tracing::debug!(text = %sanitize_for_log(&request.text), "Speech requested");

    let audio = state.speech.synthesize_speech(&request.text).await?;

    let wav = encode_wav(&audio).map_err(|e| {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to encode audio: {e}"))
    })?;

    Ok(([(header::CONTENT_TYPE, WAV_MIME_TYPE)], wav))
}
